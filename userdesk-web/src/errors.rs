use reqwest::StatusCode;
use shared::models::{ValidationErrorResponse, ValidationErrors};
use thiserror::Error;

/// Failure of a call against the users API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP 422 with per-field messages.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(ValidationErrors),

    /// HTTP 401; the session token is missing or no longer accepted.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-success status.
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Classify a non-success response from its status and raw body.
///
/// A 422 whose body cannot be parsed still counts as a validation failure,
/// with an empty error map.
pub fn error_for_status(status: StatusCode, body: &str) -> ApiError {
    match status {
        StatusCode::UNPROCESSABLE_ENTITY => {
            let errors = serde_json::from_str::<ValidationErrorResponse>(body)
                .map(|response| response.errors)
                .unwrap_or_else(|err| {
                    log::warn!("unreadable validation body: {err}");
                    ValidationErrors::new()
                });
            ApiError::Validation(errors)
        }
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        other => ApiError::Status(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unprocessable_entity_maps_field_errors() {
        let err = error_for_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"errors":{"email":["Email is required"]}}"#,
        );
        match err {
            ApiError::Validation(errors) => {
                assert_eq!(errors.first_message("email"), Some("Email is required"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_unprocessable_entity_with_garbage_body() {
        let err = error_for_status(StatusCode::UNPROCESSABLE_ENTITY, "<html>");
        assert!(matches!(err, ApiError::Validation(ref errors) if errors.is_empty()));
    }

    #[test]
    fn test_unauthorized_status() {
        assert!(matches!(
            error_for_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Unauthorized
        ));
    }

    #[test]
    fn test_other_status_is_preserved() {
        let err = error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(matches!(err, ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
        assert_eq!(err.to_string(), "unexpected status 500 Internal Server Error");
    }
}
