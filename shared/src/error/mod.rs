//! Unified error system for the ambulance services
//!
//! - [`ErrorCode`]: standardized numeric error codes
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: error type carrying a code, a message and an optional cause
//! - [`ErrorBody`]: JSON body written for every failed request
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Ambulance errors
//! - 2xxx: Meal order errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::MealOrderNotFound);
//! let err = AppError::validation("Invalid request body").with_error("expected `,`");
//!
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.status, "Bad Request");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
