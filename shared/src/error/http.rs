//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::AmbulanceNotFound | Self::MealOrderNotFound => StatusCode::NOT_FOUND,

            Self::AmbulanceAlreadyExists | Self::MealOrderAlreadyExists => StatusCode::CONFLICT,

            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation)
            Self::ValidationFailed | Self::RequiredField => StatusCode::BAD_REQUEST,
        }
    }
}
