//! Client profile document and response DTO.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Client document stored in MongoDB.
///
/// Paired one-to-one with a User (unique index on `user_id`). Created only by
/// the provisioning hook after a successful registration; the pairing is
/// immutable for the lifetime of the user.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Client {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub user_id: ObjectId,
}

/// Client profile data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ClientResponse {
    /// Client's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// Display name, defaults to the owning user's username
    #[schema(example = "alice")]
    pub name: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: client.name,
        }
    }
}
