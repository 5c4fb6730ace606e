//! Application constants module.
//!
//! Centralizes constant strings used throughout the application: error
//! messages and MongoDB collection names.

pub mod collections;
pub mod errors;

pub use collections::*;
pub use errors::*;
