//! User account document and registration DTOs.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User document stored in MongoDB.
///
/// The credential is stored as a bcrypt hash and is never serialized into an
/// API response.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub password_hash: String,
    pub created_at: mongodb::bson::DateTime,
}

/// Request payload for account registration
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Unique username (3-100 characters)
    #[validate(length(
        min = 3,
        max = 100,
        message = "Username must be between 3 and 100 characters"
    ))]
    #[schema(example = "alice")]
    pub username: String,
    /// Password (minimum 8 characters), write-only
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "secret123")]
    pub password: String,
}

/// Public account fields returned after registration.
///
/// Deliberately enumerated field-by-field: the credential has no
/// representation here under any name.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// User's username
    #[schema(example = "alice")]
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: user.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_never_contains_the_credential() {
        let user = User {
            id: Some(ObjectId::new()),
            username: "alice".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            created_at: mongodb::bson::DateTime::now(),
        };

        let response: UserResponse = user.into();
        let json = serde_json::to_value(&response).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("id"));
        assert_eq!(object["username"], "alice");
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("password_hash"));
    }

    #[test]
    fn register_request_validates_lengths() {
        use validator::Validate;

        let short_username = RegisterRequest {
            username: "ab".to_string(),
            password: "secret123".to_string(),
        };
        assert!(short_username.validate().is_err());

        let short_password = RegisterRequest {
            username: "alice".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());

        let valid = RegisterRequest {
            username: "alice".to_string(),
            password: "secret123".to_string(),
        };
        assert!(valid.validate().is_ok());
    }
}
