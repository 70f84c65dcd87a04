//! Meal Order API Handlers
//!
//! Bodies are taken as raw bytes so malformed JSON is reported by the meal order
//! operations themselves (400 with the parser message), not by an extractor.

use axum::body::Bytes;
use axum::extract::{Path, State};

use crate::core::ServerState;
use crate::meal_orders::{self, Outcome};
use crate::records;
use crate::utils::AppResult;
use shared::models::MealOrder;

/// POST /api/ambulances/{ambulance_id}/meal-orders
pub async fn create(
    State(state): State<ServerState>,
    Path(ambulance_id): Path<String>,
    body: Bytes,
) -> AppResult<Outcome<MealOrder>> {
    let outcome = records::update_ambulance(state.store(), &ambulance_id, |ambulance| {
        meal_orders::create(ambulance, &body)
    })
    .await?;

    if let Some(order) = &outcome.payload {
        tracing::info!(ambulance_id = %ambulance_id, order_id = %order.id, "Meal order created");
    }
    Ok(outcome)
}

/// GET /api/ambulances/{ambulance_id}/meal-orders
pub async fn list(
    State(state): State<ServerState>,
    Path(ambulance_id): Path<String>,
) -> AppResult<Outcome<Vec<MealOrder>>> {
    records::read_ambulance(state.store(), &ambulance_id, meal_orders::list).await
}

/// GET /api/ambulances/{ambulance_id}/meal-orders/{order_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path((ambulance_id, order_id)): Path<(String, String)>,
) -> AppResult<Outcome<MealOrder>> {
    records::read_ambulance(state.store(), &ambulance_id, |ambulance| {
        meal_orders::get(ambulance, &order_id)
    })
    .await
}

/// PUT /api/ambulances/{ambulance_id}/meal-orders/{order_id}
pub async fn update(
    State(state): State<ServerState>,
    Path((ambulance_id, order_id)): Path<(String, String)>,
    body: Bytes,
) -> AppResult<Outcome<MealOrder>> {
    let outcome = records::update_ambulance(state.store(), &ambulance_id, |ambulance| {
        meal_orders::update(ambulance, &order_id, &body)
    })
    .await?;

    tracing::info!(ambulance_id = %ambulance_id, order_id = %order_id, "Meal order updated");
    Ok(outcome)
}

/// DELETE /api/ambulances/{ambulance_id}/meal-orders/{order_id}
pub async fn delete(
    State(state): State<ServerState>,
    Path((ambulance_id, order_id)): Path<(String, String)>,
) -> AppResult<Outcome<()>> {
    delete_order(&state, &ambulance_id, &order_id).await
}

/// DELETE /api/ambulances/{ambulance_id}/meal-orders/ (no order id in the path)
pub async fn delete_without_id(
    State(state): State<ServerState>,
    Path(ambulance_id): Path<String>,
) -> AppResult<Outcome<()>> {
    delete_order(&state, &ambulance_id, "").await
}

async fn delete_order(
    state: &ServerState,
    ambulance_id: &str,
    order_id: &str,
) -> AppResult<Outcome<()>> {
    let outcome = records::update_ambulance(state.store(), ambulance_id, |ambulance| {
        meal_orders::delete(ambulance, order_id)
    })
    .await?;

    tracing::info!(ambulance_id = %ambulance_id, order_id = %order_id, "Meal order deleted");
    Ok(outcome)
}
