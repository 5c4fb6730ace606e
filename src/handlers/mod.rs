//! HTTP request handlers organized by domain.

pub mod account_handler;
pub mod artist_handler;
pub mod client_handler;
pub mod work_handler;

pub use account_handler::*;
pub use artist_handler::*;
pub use client_handler::*;
pub use work_handler::*;
