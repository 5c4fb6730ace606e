//! Common validation utilities and helpers.

use mongodb::bson::oid::ObjectId;
use validator::ValidationErrors;

use crate::constants::ERR_INVALID_ID;
use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Extracts the per-field messages so the response body lists exactly what
/// failed.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError(errors)
}

/// Parse a path/body id into an ObjectId, rejecting malformed input early.
pub fn parse_object_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(ERR_INVALID_ID.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 3, message = "too short"))]
        name: String,
    }

    #[test]
    fn field_messages_survive_the_conversion() {
        let probe = Probe {
            name: "ab".to_string(),
        };
        let err = validation_errors_to_api_error(probe.validate().unwrap_err());

        match err {
            ApiError::ValidationError(errors) => {
                assert_eq!(errors, vec!["too short".to_string()]);
            }
            other => panic!("expected ValidationError, got {}", other),
        }
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(parse_object_id("not-an-id").is_err());
        assert!(parse_object_id("").is_err());

        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex()).unwrap(), oid);
    }
}
