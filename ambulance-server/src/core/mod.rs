//! Core module - configuration, state, server lifecycle
//!
//! - [`Config`] - configuration from environment
//! - [`ServerState`] - state shared with handlers
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup/shutdown errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, StoreBackend};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
