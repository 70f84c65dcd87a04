//! Ambulance lookup and persistence
//!
//! Every meal order request goes through here: fetch the ambulance document,
//! run a list operation on it, write the document back if the operation
//! changed it. Fetch and write are separate store calls; two concurrent
//! requests on the same ambulance can overwrite each other (last write wins).

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Ambulance;
use shared::util::{needs_assigned_id, new_id};

use crate::db::{DocumentStore, StoreError};
use crate::meal_orders::Outcome;

/// Store handle the handlers receive through router state
pub type AmbulanceStore = dyn DocumentStore<Ambulance>;

async fn fetch(store: &AmbulanceStore, ambulance_id: &str) -> AppResult<Ambulance> {
    store.find_document(ambulance_id).await.map_err(|e| {
        if !matches!(e, StoreError::NotFound(_)) {
            tracing::warn!(ambulance_id = %ambulance_id, error = %e, "Ambulance lookup failed");
        }
        AppError::new(ErrorCode::AmbulanceNotFound).with_error(e)
    })
}

/// Fetch, mutate, and persist if the mutation changed the document
///
/// Errors from `mutate` are returned as-is and nothing is written.
pub async fn update_ambulance<T, F>(
    store: &AmbulanceStore,
    ambulance_id: &str,
    mutate: F,
) -> AppResult<Outcome<T>>
where
    F: FnOnce(Ambulance) -> AppResult<Outcome<T>>,
{
    let ambulance = fetch(store, ambulance_id).await?;
    let mut outcome = mutate(ambulance)?;

    if let Some(updated) = outcome.updated.take() {
        store
            .update_document(ambulance_id, &updated)
            .await
            .map_err(|e| AppError::new(ErrorCode::DatabaseError).with_error(e))?;
        tracing::debug!(
            ambulance_id = %ambulance_id,
            meal_orders = updated.meal_orders.len(),
            "Ambulance updated"
        );
    }

    Ok(outcome)
}

/// Fetch and run a read-only operation; never writes
pub async fn read_ambulance<T, F>(
    store: &AmbulanceStore,
    ambulance_id: &str,
    read: F,
) -> AppResult<Outcome<T>>
where
    F: FnOnce(Ambulance) -> AppResult<Outcome<T>>,
{
    let ambulance = fetch(store, ambulance_id).await?;
    let mut outcome = read(ambulance)?;
    outcome.updated = None;
    Ok(outcome)
}

/// Register a new ambulance document from a JSON body
pub async fn create_ambulance(store: &AmbulanceStore, body: &[u8]) -> AppResult<Ambulance> {
    let mut ambulance: Ambulance = serde_json::from_slice(body)
        .map_err(|e| AppError::validation("Invalid request body").with_error(e))?;

    if ambulance.name.is_empty() {
        return Err(AppError::required("Name"));
    }
    if needs_assigned_id(&ambulance.id) {
        ambulance.id = new_id();
    }

    store
        .create_document(&ambulance.id, &ambulance)
        .await
        .map_err(|e| match e {
            StoreError::Conflict(_) => {
                AppError::new(ErrorCode::AmbulanceAlreadyExists).with_error(e)
            }
            other => AppError::with_message(ErrorCode::DatabaseError, "Failed to create ambulance")
                .with_error(other),
        })?;

    tracing::info!(ambulance_id = %ambulance.id, name = %ambulance.name, "Ambulance created");
    Ok(ambulance)
}

/// Remove an ambulance document together with its meal orders
pub async fn delete_ambulance(store: &AmbulanceStore, ambulance_id: &str) -> AppResult<()> {
    store
        .delete_document(ambulance_id)
        .await
        .map_err(|e| match e {
            StoreError::NotFound(_) => AppError::new(ErrorCode::AmbulanceNotFound).with_error(e),
            other => AppError::with_message(ErrorCode::DatabaseError, "Failed to delete ambulance")
                .with_error(other),
        })?;

    tracing::info!(ambulance_id = %ambulance_id, "Ambulance deleted");
    Ok(())
}
