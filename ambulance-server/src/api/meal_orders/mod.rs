//! Meal Order API module

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

const COLLECTION: &str = "/api/ambulances/{ambulance_id}/meal-orders";

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(COLLECTION, get(handler::list).post(handler::create))
        // Trailing slash = empty order id; rejected with 400 by the delete operation
        .route(&format!("{COLLECTION}/"), delete(handler::delete_without_id))
        .route(
            &format!("{COLLECTION}/{{order_id}}"),
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
