//! Data models organized by entity.

pub mod artist;
pub mod client;
pub mod user;
pub mod work;

pub use artist::*;
pub use client::*;
pub use user::*;
pub use work::*;
