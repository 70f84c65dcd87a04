//! Ambulance API module

mod handler;

use axum::{
    Router,
    routing::{delete, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/ambulances", post(handler::create))
        .route("/api/ambulances/{ambulance_id}", delete(handler::delete))
}
