//! Shared fixtures for the HTTP API tests

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use ambulance_server::db::StoreResult;
use ambulance_server::{Config, DocumentStore, MemoryStore, ServerState, StoreError, api};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use shared::models::{Ambulance, MealOrder};
use tower::ServiceExt;

pub const AMBULANCE_ID: &str = "test-ambulance";
pub const ENTRY_ID: &str = "test-entry";

/// Memory store that counts writes and can be told to fail them
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryStore<Ambulance>,
    updates: AtomicUsize,
    fail_updates: AtomicBool,
}

impl RecordingStore {
    pub fn update_calls(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn fail_updates(&self) {
        self.fail_updates.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore<Ambulance> for RecordingStore {
    async fn create_document(&self, id: &str, document: &Ambulance) -> StoreResult<()> {
        self.inner.create_document(id, document).await
    }

    async fn find_document(&self, id: &str) -> StoreResult<Ambulance> {
        self.inner.find_document(id).await
    }

    async fn update_document(&self, id: &str, document: &Ambulance) -> StoreResult<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(StoreError::Database("write rejected".to_string()));
        }
        self.inner.update_document(id, document).await
    }

    async fn delete_document(&self, id: &str) -> StoreResult<()> {
        self.inner.delete_document(id).await
    }

    async fn disconnect(&self) -> StoreResult<()> {
        self.inner.disconnect().await
    }
}

pub fn entry() -> MealOrder {
    MealOrder {
        id: ENTRY_ID.to_string(),
        name: "test-patient".to_string(),
        dietary_req: "Vegetarian".to_string(),
        medical_need: "Diabetes".to_string(),
        consumation_time: "2024-05-26T12:00:00Z".parse().ok(),
    }
}

/// Router over a store holding one ambulance with one meal order
pub async fn seeded_app() -> (Router, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::default());
    let ambulance = Ambulance {
        id: AMBULANCE_ID.to_string(),
        name: "Ward 1".to_string(),
        room_number: "101".to_string(),
        meal_orders: vec![entry()],
    };
    store
        .create_document(AMBULANCE_ID, &ambulance)
        .await
        .expect("seed ambulance");

    let state = ServerState::new(Config::in_memory(), store.clone());
    (api::router(state), store)
}

/// Fire one request; the body comes back as JSON (`Null` when empty)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, json)
}

pub async fn stored(store: &RecordingStore) -> Ambulance {
    store
        .find_document(AMBULANCE_ID)
        .await
        .expect("seeded ambulance present")
}
