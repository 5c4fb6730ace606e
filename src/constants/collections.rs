//! MongoDB collection names.

pub const COLLECTION_USERS: &str = "users";
pub const COLLECTION_CLIENTS: &str = "clients";
pub const COLLECTION_ARTISTS: &str = "artists";
pub const COLLECTION_WORKS: &str = "works";
