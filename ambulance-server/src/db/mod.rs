//! Document store layer
//!
//! One document per key, read and written whole. Two backends implement
//! [`DocumentStore`]:
//!
//! - [`MemoryStore`]: `DashMap` backed, process lifetime only
//! - [`RedbStore`]: embedded redb file, JSON encoded documents

pub mod memory;
pub mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

use async_trait::async_trait;
use thiserror::Error;

/// Document store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Document already exists: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store is disconnected")]
    Disconnected,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Key/document persistence collaborator
///
/// `update_document` overwrites the whole document; there is no partial
/// update. Implementations give no isolation between a `find_document` and a
/// later `update_document` of the same key.
#[async_trait]
pub trait DocumentStore<D>: Send + Sync
where
    D: Send + Sync + 'static,
{
    /// Insert a new document. `Conflict` if the id is taken.
    async fn create_document(&self, id: &str, document: &D) -> StoreResult<()>;

    /// Fetch a document. `NotFound` if absent.
    async fn find_document(&self, id: &str) -> StoreResult<D>;

    /// Overwrite an existing document. `NotFound` if absent.
    async fn update_document(&self, id: &str, document: &D) -> StoreResult<()>;

    /// Remove a document. `NotFound` if absent.
    async fn delete_document(&self, id: &str) -> StoreResult<()>;

    /// Release the backend. Every later call fails with `Disconnected`.
    async fn disconnect(&self) -> StoreResult<()>;
}
