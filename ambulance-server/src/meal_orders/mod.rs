//! Meal order list operations
//!
//! Pure transforms over an [`Ambulance`]: each operation takes the fetched
//! document and returns an [`Outcome`] telling the caller whether the document
//! changed (and must be persisted), what to answer, and with which status.
//! Nothing here touches the store.
//!
//! `create` checks the required fields; `update` replaces the matched entry
//! with the payload as-is and does not re-check them.

mod outcome;

pub use outcome::Outcome;

use http::StatusCode;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Ambulance, MealOrder};
use shared::util::{needs_assigned_id, new_id};

fn parse_order(body: &[u8]) -> AppResult<MealOrder> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::validation("Invalid request body").with_error(e))
}

fn not_found(order_id: &str) -> AppError {
    AppError::new(ErrorCode::MealOrderNotFound)
        .with_error(format!("no meal order with id {}", order_id))
}

fn already_exists(order_id: &str) -> AppError {
    AppError::new(ErrorCode::MealOrderAlreadyExists)
        .with_error(format!("meal order {} already exists", order_id))
}

/// Append a new order built from `body`
pub fn create(mut ambulance: Ambulance, body: &[u8]) -> AppResult<Outcome<MealOrder>> {
    let mut order = parse_order(body)?;

    if let Some(field) = order.missing_required_field() {
        return Err(AppError::required(field));
    }

    if needs_assigned_id(&order.id) {
        order.id = new_id();
    } else if ambulance.find_order_index(&order.id).is_some() {
        return Err(already_exists(&order.id));
    }

    let order_id = order.id.clone();
    ambulance.meal_orders.push(order);

    let stored = ambulance
        .find_order(&order_id)
        .cloned()
        .ok_or_else(|| AppError::internal("Failed to save entry"))?;

    Ok(Outcome::changed(ambulance, Some(stored), StatusCode::OK))
}

/// Remove the order with `order_id`
pub fn delete(mut ambulance: Ambulance, order_id: &str) -> AppResult<Outcome<()>> {
    if order_id.is_empty() {
        return Err(AppError::validation("Order id is required"));
    }

    let index = ambulance
        .find_order_index(order_id)
        .ok_or_else(|| not_found(order_id))?;
    ambulance.meal_orders.remove(index);

    Ok(Outcome::changed(ambulance, None, StatusCode::NO_CONTENT))
}

/// Look up a single order
pub fn get(ambulance: Ambulance, order_id: &str) -> AppResult<Outcome<MealOrder>> {
    let order = ambulance
        .find_order(order_id)
        .cloned()
        .ok_or_else(|| not_found(order_id))?;

    Ok(Outcome::unchanged(order))
}

/// All orders, in list order
pub fn list(ambulance: Ambulance) -> AppResult<Outcome<Vec<MealOrder>>> {
    Ok(Outcome::unchanged(ambulance.meal_orders))
}

/// Replace the order with `order_id` by the payload in `body`
///
/// An empty `id` in the payload takes the path's `order_id`. A payload `id`
/// already held by another entry is a conflict.
pub fn update(
    mut ambulance: Ambulance,
    order_id: &str,
    body: &[u8],
) -> AppResult<Outcome<MealOrder>> {
    let mut order = parse_order(body)?;

    let index = ambulance
        .find_order_index(order_id)
        .ok_or_else(|| not_found(order_id))?;

    if order.id.is_empty() {
        order.id = order_id.to_string();
    } else if ambulance
        .find_order_index(&order.id)
        .is_some_and(|other| other != index)
    {
        return Err(already_exists(&order.id));
    }
    ambulance.meal_orders[index] = order.clone();

    Ok(Outcome::changed(ambulance, Some(order), StatusCode::OK))
}
