//! Work document, the work_type enumeration, and work DTOs.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Platform category of a work's external link.
///
/// The literal variant names are the canonical wire and storage encoding.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum WorkType {
    Youtube,
    Instagram,
    Other,
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WorkType {
    /// The canonical string encoding, as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Youtube => "Youtube",
            WorkType::Instagram => "Instagram",
            WorkType::Other => "Other",
        }
    }

    /// Parse the canonical encoding. Exact match; anything else is rejected
    /// by the caller as a validation failure.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Youtube" => Some(WorkType::Youtube),
            "Instagram" => Some(WorkType::Instagram),
            "Other" => Some(WorkType::Other),
            _ => None,
        }
    }
}

/// Work document stored in MongoDB.
///
/// Each work belongs to exactly one artist; deleting the artist deletes its
/// works (explicit cascade in the artist service).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Work {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub link: String,
    pub work_type: WorkType,
    pub artist_id: ObjectId,
}

/// Request payload for creating a work
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWorkRequest {
    /// Link to the external media (valid URL, max 200 characters)
    #[validate(
        url(message = "Link must be a valid URL"),
        length(max = 200, message = "Link must be at most 200 characters")
    )]
    #[schema(example = "https://youtu.be/x")]
    pub link: String,
    /// Platform category: 'Youtube', 'Instagram', or 'Other'
    #[schema(example = "Youtube")]
    pub work_type: String,
    /// Id of the owning artist
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub artist: String,
}

/// Work data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct WorkResponse {
    /// Work's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// Link to the external media
    #[schema(example = "https://youtu.be/x")]
    pub link: String,
    /// Platform category
    pub work_type: WorkType,
    /// Id of the owning artist
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub artist: String,
}

impl From<Work> for WorkResponse {
    fn from(work: Work) -> Self {
        Self {
            id: work.id.map(|id| id.to_hex()).unwrap_or_default(),
            link: work.link,
            work_type: work.work_type,
            artist: work.artist_id.to_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_type_parses_only_declared_values() {
        assert_eq!(WorkType::parse("Youtube"), Some(WorkType::Youtube));
        assert_eq!(WorkType::parse("Instagram"), Some(WorkType::Instagram));
        assert_eq!(WorkType::parse("Other"), Some(WorkType::Other));
        assert_eq!(WorkType::parse("youtube"), None);
        assert_eq!(WorkType::parse("YT"), None);
        assert_eq!(WorkType::parse(""), None);
    }

    #[test]
    fn work_type_serializes_to_the_literal_strings() {
        assert_eq!(
            serde_json::to_value(WorkType::Youtube).unwrap(),
            serde_json::json!("Youtube")
        );
        let parsed: WorkType = serde_json::from_str("\"Instagram\"").unwrap();
        assert_eq!(parsed, WorkType::Instagram);
        assert!(serde_json::from_str::<WorkType>("\"Vimeo\"").is_err());
    }

    #[test]
    fn create_work_request_rejects_bad_links() {
        use validator::Validate;

        let bad_url = CreateWorkRequest {
            link: "not a url".to_string(),
            work_type: "Youtube".to_string(),
            artist: "507f1f77bcf86cd799439011".to_string(),
        };
        assert!(bad_url.validate().is_err());

        let too_long = CreateWorkRequest {
            link: format!("https://example.com/{}", "a".repeat(200)),
            work_type: "Youtube".to_string(),
            artist: "507f1f77bcf86cd799439011".to_string(),
        };
        assert!(too_long.validate().is_err());

        let valid = CreateWorkRequest {
            link: "https://youtu.be/x".to_string(),
            work_type: "Youtube".to_string(),
            artist: "507f1f77bcf86cd799439011".to_string(),
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn work_response_exposes_the_owning_artist_id() {
        let artist_id = ObjectId::new();
        let work = Work {
            id: Some(ObjectId::new()),
            link: "https://youtu.be/x".to_string(),
            work_type: WorkType::Youtube,
            artist_id,
        };

        let response: WorkResponse = work.into();
        assert_eq!(response.artist, artist_id.to_hex());
        assert_eq!(response.work_type, WorkType::Youtube);
    }
}
