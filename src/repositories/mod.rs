//! Repository layer for database operations.
//!
//! One repository per collection, keeping all MongoDB access behind a small
//! interface the service layer consumes.

pub mod artist_repository;
pub mod client_repository;
pub mod user_repository;
pub mod work_repository;

pub use artist_repository::ArtistRepository;
pub use client_repository::ClientRepository;
pub use user_repository::UserRepository;
pub use work_repository::WorkRepository;
