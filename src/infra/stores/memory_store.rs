use crate::domain::ports::CollectionStore;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory collection store for tests and ephemeral embeddings.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn read(&self, collection: &str) -> Result<Option<String>, AppError> {
        Ok(self.collections.read().await.get(collection).cloned())
    }

    async fn write(&self, collection: &str, payload: &str) -> Result<(), AppError> {
        self.collections
            .write()
            .await
            .insert(collection.to_string(), payload.to_string());
        Ok(())
    }

    async fn remove(&self, collection: &str) -> Result<(), AppError> {
        self.collections.write().await.remove(collection);
        Ok(())
    }
}
