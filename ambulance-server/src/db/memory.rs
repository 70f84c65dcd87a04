//! In-memory document store

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::{DocumentStore, StoreError, StoreResult};

/// `DashMap` backed store; documents are cloned in and out
#[derive(Debug)]
pub struct MemoryStore<D> {
    documents: DashMap<String, D>,
    disconnected: AtomicBool,
}

impl<D> MemoryStore<D> {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
            disconnected: AtomicBool::new(false),
        }
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn ensure_connected(&self) -> StoreResult<()> {
        if self.disconnected.load(Ordering::Acquire) {
            return Err(StoreError::Disconnected);
        }
        Ok(())
    }
}

impl<D> Default for MemoryStore<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<D> DocumentStore<D> for MemoryStore<D>
where
    D: Clone + Send + Sync + 'static,
{
    async fn create_document(&self, id: &str, document: &D) -> StoreResult<()> {
        self.ensure_connected()?;
        match self.documents.entry(id.to_string()) {
            Entry::Occupied(_) => Err(StoreError::Conflict(id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(document.clone());
                Ok(())
            }
        }
    }

    async fn find_document(&self, id: &str) -> StoreResult<D> {
        self.ensure_connected()?;
        self.documents
            .get(id)
            .map(|doc| doc.value().clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn update_document(&self, id: &str, document: &D) -> StoreResult<()> {
        self.ensure_connected()?;
        let mut existing = self
            .documents
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *existing = document.clone();
        Ok(())
    }

    async fn delete_document(&self, id: &str) -> StoreResult<()> {
        self.ensure_connected()?;
        self.documents
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn disconnect(&self) -> StoreResult<()> {
        self.disconnected.store(true, Ordering::Release);
        self.documents.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Ambulance;

    fn ambulance(id: &str, name: &str) -> Ambulance {
        Ambulance {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryStore::new();
        store.create_document("a1", &ambulance("a1", "Ward")).await.unwrap();

        let found = store.find_document("a1").await.unwrap();
        assert_eq!(found.name, "Ward");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_create_existing_is_conflict() {
        let store = MemoryStore::new();
        store.create_document("a1", &ambulance("a1", "Ward")).await.unwrap();

        let err = store
            .create_document("a1", &ambulance("a1", "Other"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(id) if id == "a1"));
        assert_eq!(store.find_document("a1").await.unwrap().name, "Ward");
    }

    #[tokio::test]
    async fn test_update_overwrites_whole_document() {
        let store = MemoryStore::new();
        store.create_document("a1", &ambulance("a1", "Ward")).await.unwrap();
        store
            .update_document("a1", &ambulance("a1", "Renamed"))
            .await
            .unwrap();

        assert_eq!(store.find_document("a1").await.unwrap().name, "Renamed");
    }

    #[tokio::test]
    async fn test_missing_documents() {
        let store: MemoryStore<Ambulance> = MemoryStore::new();

        assert!(matches!(
            store.find_document("nope").await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.update_document("nope", &ambulance("nope", "x")).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_document("nope").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_then_find() {
        let store = MemoryStore::new();
        store.create_document("a1", &ambulance("a1", "Ward")).await.unwrap();
        store.delete_document("a1").await.unwrap();

        assert!(store.is_empty());
        assert!(store.find_document("a1").await.is_err());
    }

    #[tokio::test]
    async fn test_disconnect_rejects_calls() {
        let store = MemoryStore::new();
        store.create_document("a1", &ambulance("a1", "Ward")).await.unwrap();
        store.disconnect().await.unwrap();

        assert!(matches!(
            store.find_document("a1").await,
            Err(StoreError::Disconnected)
        ));
    }
}
