//! Error message constants used throughout the application.

// User / registration errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_USERNAME_EXISTS: &str = "Username already taken";
pub const ERR_INVALID_ID: &str = "Invalid id format";

// Client errors
pub const ERR_CLIENT_NOT_FOUND: &str = "Client not found";
pub const ERR_CLIENT_EXISTS: &str = "A client profile already exists for this user";

// Artist errors
pub const ERR_ARTIST_NOT_FOUND: &str = "Artist not found";
pub const ERR_WORK_ARTIST_MISSING: &str = "Work references an artist that does not exist";

// Work errors
pub const ERR_WORK_NOT_FOUND: &str = "Work not found";
pub const ERR_INVALID_WORK_TYPE: &str = "work_type must be one of 'Youtube', 'Instagram', 'Other'";
