//! Data models
//!
//! Document shapes shared by the server and its API clients. JSON field names
//! are camelCase.

pub mod ambulance;
pub mod meal_order;

// Re-exports
pub use ambulance::*;
pub use meal_order::*;
