//! Error type and error response body

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with structured error code
///
/// - `code` selects the HTTP status and the numeric code in the body
/// - `message` is the human-readable summary
/// - `error` optionally carries the underlying cause (parser or store message)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Underlying cause, surfaced to the client as `error`
    pub error: Option<String>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            error: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            error: None,
        }
    }

    /// Attach the underlying cause
    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a required-field error
    pub fn required(field: &str) -> Self {
        Self::with_message(ErrorCode::RequiredField, format!("{} is required", field))
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Error response body
///
/// ```json
/// { "status": "Not Found", "code": 1001, "message": "Ambulance not found", "error": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// HTTP reason phrase of the response status
    pub status: String,
    /// Numeric [`ErrorCode`]
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Underlying cause, when there is one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            status: err
                .http_status()
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            code: err.code.code(),
            message: err.message.clone(),
            error: err.error.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ErrorBody::from(&self);

        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                error = ?self.error,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::AmbulanceNotFound);
        assert_eq!(err.code, ErrorCode::AmbulanceNotFound);
        assert_eq!(err.message, "Ambulance not found");
        assert!(err.error.is_none());
    }

    #[test]
    fn test_app_error_with_error() {
        let err = AppError::validation("Invalid request body").with_error("expected `,`");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.error.as_deref(), Some("expected `,`"));
    }

    #[test]
    fn test_required() {
        let err = AppError::required("Name");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "Name is required");
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::MealOrderNotFound, "Entry not found");
        assert_eq!(format!("{}", err), "Entry not found");
    }

    #[test]
    fn test_error_body_from_app_error() {
        let err = AppError::new(ErrorCode::AmbulanceNotFound).with_error("document not found");
        let body = ErrorBody::from(&err);

        assert_eq!(body.status, "Not Found");
        assert_eq!(body.code, 1001);
        assert_eq!(body.message, "Ambulance not found");
        assert_eq!(body.error.as_deref(), Some("document not found"));
    }

    #[test]
    fn test_error_body_serialize_omits_missing_error() {
        let body = ErrorBody::from(&AppError::validation("Order id is required"));
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["status"], "Bad Request");
        assert_eq!(json["message"], "Order id is required");
        assert!(json.get("error").is_none());
    }
}
