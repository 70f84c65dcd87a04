//! Ambulance API - meal orders for ambulance wards
//!
//! # Layout
//!
//! ```text
//! ambulance-server/src/
//! ├── core/          # config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # DocumentStore trait, memory and redb backends
//! ├── meal_orders/   # pure operations on an ambulance's order list
//! ├── records.rs     # fetch / mutate / persist glue
//! └── utils/         # logger
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod meal_orders;
pub mod records;
pub mod utils;

pub use core::{Config, Server, ServerState, StoreBackend};
pub use db::{DocumentStore, MemoryStore, RedbStore, StoreError};
pub use utils::logger::init_logger;
pub use utils::{AppError, AppResult, ErrorCode};
