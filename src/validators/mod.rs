//! Validation helpers shared across handlers and services.

pub mod common;

pub use common::*;
