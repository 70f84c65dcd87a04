//! Utilities
//!
//! - [`AppError`] / [`AppResult`] - request error type (from `shared::error`)
//! - [`logger`] - tracing subscriber setup

pub mod logger;

pub use shared::error::{AppError, AppResult, ErrorCode};
