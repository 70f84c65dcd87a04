//! redb-backed document store
//!
//! # Tables
//!
//! | Table | Key | Value |
//! |-------|-----|-------|
//! | `documents` | document id | JSON-serialized document |
//!
//! redb transactions are blocking, so every call hops onto
//! `tokio::task::spawn_blocking`. Each call is its own write (or read)
//! transaction; a find followed by an update is two transactions.

use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{DocumentStore, StoreError, StoreResult};

/// key = document id, value = JSON bytes
const DOCUMENTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("documents");

/// redb failures, folded into [`StoreError::Database`]
#[derive(Debug, Error)]
pub enum RedbError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Document already exists: {0}")]
    Conflict(String),
}

impl From<RedbError> for StoreError {
    fn from(err: RedbError) -> Self {
        match err {
            RedbError::NotFound(id) => StoreError::NotFound(id),
            RedbError::Conflict(id) => StoreError::Conflict(id),
            other => StoreError::Database(other.to_string()),
        }
    }
}

/// Document store backed by a single redb table
pub struct RedbStore<D> {
    db: Arc<Database>,
    disconnected: Arc<AtomicBool>,
    _document: PhantomData<fn() -> D>,
}

impl<D> Clone for RedbStore<D> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            disconnected: self.disconnected.clone(),
            _document: PhantomData,
        }
    }
}

impl<D> RedbStore<D> {
    /// Open or create the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path).map_err(RedbError::from)?;
        Self::with_database(db)
    }

    /// In-memory backend, for tests
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder()
            .create_with_backend(redb::backends::InMemoryBackend::new())
            .map_err(RedbError::from)?;
        Self::with_database(db)
    }

    fn with_database(db: Database) -> StoreResult<Self> {
        // Create the table up front so read transactions never miss it
        let init = || -> Result<(), RedbError> {
            let write_txn = db.begin_write()?;
            {
                let _ = write_txn.open_table(DOCUMENTS_TABLE)?;
            }
            write_txn.commit()?;
            Ok(())
        };
        init()?;

        Ok(Self {
            db: Arc::new(db),
            disconnected: Arc::new(AtomicBool::new(false)),
            _document: PhantomData,
        })
    }

    fn ensure_connected(&self) -> StoreResult<()> {
        if self.disconnected.load(Ordering::Acquire) {
            return Err(StoreError::Disconnected);
        }
        Ok(())
    }

    /// Run a blocking redb closure off the async runtime
    async fn blocking<T, F>(&self, f: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T, RedbError> + Send + 'static,
    {
        self.ensure_connected()?;
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || f(&db))
            .await
            .map_err(|e| StoreError::Database(format!("Store task failed: {}", e)))?
            .map_err(StoreError::from)
    }
}

fn insert(db: &Database, id: &str, value: &[u8], must_exist: bool) -> Result<(), RedbError> {
    let write_txn = db.begin_write()?;
    {
        let mut table = write_txn.open_table(DOCUMENTS_TABLE)?;
        let exists = table.get(id)?.is_some();
        match (exists, must_exist) {
            (true, false) => return Err(RedbError::Conflict(id.to_string())),
            (false, true) => return Err(RedbError::NotFound(id.to_string())),
            _ => {}
        }
        table.insert(id, value)?;
    }
    write_txn.commit()?;
    Ok(())
}

#[async_trait]
impl<D> DocumentStore<D> for RedbStore<D>
where
    D: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn create_document(&self, id: &str, document: &D) -> StoreResult<()> {
        let value = serde_json::to_vec(document)?;
        let id = id.to_string();
        self.blocking(move |db| insert(db, &id, &value, false)).await
    }

    async fn find_document(&self, id: &str) -> StoreResult<D> {
        let key = id.to_string();
        let bytes = self
            .blocking(move |db| {
                let read_txn = db.begin_read()?;
                let table = read_txn.open_table(DOCUMENTS_TABLE)?;
                let found = table.get(key.as_str())?.map(|value| value.value().to_vec());
                found.ok_or(RedbError::NotFound(key))
            })
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn update_document(&self, id: &str, document: &D) -> StoreResult<()> {
        let value = serde_json::to_vec(document)?;
        let id = id.to_string();
        self.blocking(move |db| insert(db, &id, &value, true)).await
    }

    async fn delete_document(&self, id: &str) -> StoreResult<()> {
        let id = id.to_string();
        self.blocking(move |db| {
            let write_txn = db.begin_write()?;
            let removed = {
                let mut table = write_txn.open_table(DOCUMENTS_TABLE)?;
                table.remove(id.as_str())?.is_some()
            };
            if !removed {
                return Err(RedbError::NotFound(id));
            }
            write_txn.commit()?;
            Ok(())
        })
        .await
    }

    async fn disconnect(&self) -> StoreResult<()> {
        self.disconnected.store(true, Ordering::Release);
        tracing::debug!("redb document store disconnected");
        Ok(())
    }
}
