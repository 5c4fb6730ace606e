//! Artist document and DTOs.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::work::{Work, WorkResponse};

/// Artist document stored in MongoDB.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Artist {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
}

/// Request payload for creating or renaming an artist
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ArtistRequest {
    /// Artist name (1-100 characters)
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Rex")]
    pub name: String,
}

/// Artist data returned in API responses, with its works fully serialized.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ArtistResponse {
    /// Artist's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// Artist name
    #[schema(example = "Rex")]
    pub name: String,
    /// Works owned by this artist
    pub works: Vec<WorkResponse>,
}

impl ArtistResponse {
    /// Build the response from an artist and its works.
    pub fn with_works(artist: Artist, works: Vec<Work>) -> Self {
        Self {
            id: artist.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: artist.name,
            works: works.into_iter().map(WorkResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::work::WorkType;

    #[test]
    fn artist_response_embeds_each_work() {
        let artist_id = ObjectId::new();
        let artist = Artist {
            id: Some(artist_id),
            name: "Rex".to_string(),
        };
        let works = vec![Work {
            id: Some(ObjectId::new()),
            link: "https://youtu.be/x".to_string(),
            work_type: WorkType::Youtube,
            artist_id,
        }];

        let response = ArtistResponse::with_works(artist, works);
        assert_eq!(response.name, "Rex");
        assert_eq!(response.works.len(), 1);
        assert_eq!(response.works[0].link, "https://youtu.be/x");
        assert_eq!(response.works[0].artist, artist_id.to_hex());
    }

    #[test]
    fn artist_request_enforces_name_length() {
        use validator::Validate;

        let empty = ArtistRequest {
            name: String::new(),
        };
        assert!(empty.validate().is_err());

        let too_long = ArtistRequest {
            name: "a".repeat(101),
        };
        assert!(too_long.validate().is_err());

        let valid = ArtistRequest {
            name: "Rex".to_string(),
        };
        assert!(valid.validate().is_ok());
    }
}
