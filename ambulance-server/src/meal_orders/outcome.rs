use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use shared::models::Ambulance;

/// Result of a list operation
///
/// `updated` is `Some` only when the document changed and has to be written
/// back. `payload` is the response body, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub updated: Option<Ambulance>,
    pub payload: Option<T>,
    pub status: StatusCode,
}

impl<T> Outcome<T> {
    pub fn changed(ambulance: Ambulance, payload: Option<T>, status: StatusCode) -> Self {
        Self {
            updated: Some(ambulance),
            payload,
            status,
        }
    }

    /// Read-only answer with `200 OK`
    pub fn unchanged(payload: T) -> Self {
        Self {
            updated: None,
            payload: Some(payload),
            status: StatusCode::OK,
        }
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        match self.payload {
            Some(payload) => (self.status, Json(payload)).into_response(),
            None => self.status.into_response(),
        }
    }
}
