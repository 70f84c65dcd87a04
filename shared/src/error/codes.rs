//! Unified error codes for the ambulance services
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Ambulance errors
//! - 2xxx: Meal order errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes serialize as plain `u16` values so API clients can switch on them
/// without knowing the Rust variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Ambulance ====================
    /// Ambulance not found
    AmbulanceNotFound = 1001,
    /// Ambulance with this id already exists
    AmbulanceAlreadyExists = 1002,

    // ==================== 2xxx: Meal order ====================
    /// Meal order not found in the ambulance's list
    MealOrderNotFound = 2001,
    /// Meal order with this id already exists in the list
    MealOrderAlreadyExists = 2002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Document store error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::ValidationFailed => "Validation failed",
            Self::RequiredField => "Required field missing",

            Self::AmbulanceNotFound => "Ambulance not found",
            Self::AmbulanceAlreadyExists => "Ambulance already exists",

            Self::MealOrderNotFound => "Entry not found",
            Self::MealOrderAlreadyExists => "Entry already exists",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Failed to update ambulance in database",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when a `u16` does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            7 => Ok(ErrorCode::RequiredField),

            1001 => Ok(ErrorCode::AmbulanceNotFound),
            1002 => Ok(ErrorCode::AmbulanceAlreadyExists),

            2001 => Ok(ErrorCode::MealOrderNotFound),
            2002 => Ok(ErrorCode::MealOrderAlreadyExists),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
