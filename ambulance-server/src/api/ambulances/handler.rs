//! Ambulance API Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use http::StatusCode;

use crate::core::ServerState;
use crate::records;
use crate::utils::AppResult;
use shared::models::Ambulance;

/// POST /api/ambulances
pub async fn create(State(state): State<ServerState>, body: Bytes) -> AppResult<Json<Ambulance>> {
    let ambulance = records::create_ambulance(state.store(), &body).await?;
    Ok(Json(ambulance))
}

/// DELETE /api/ambulances/{ambulance_id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(ambulance_id): Path<String>,
) -> AppResult<StatusCode> {
    records::delete_ambulance(state.store(), &ambulance_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
