//! Shared types for the ambulance services
//!
//! Domain models, the unified error system and small id helpers used by the
//! server and its tests.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use models::{Ambulance, MealOrder};
