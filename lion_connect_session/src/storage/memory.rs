use async_trait::async_trait;
use std::collections::HashMap;

use crate::storage::errors::StorageError;
use crate::storage::types::{ClientStore, InMemoryClientStore, StoreData};

impl InMemoryClientStore {
    pub(crate) fn new() -> Self {
        tracing::info!("Creating new in-memory client store");
        Self {
            entry: HashMap::new(),
        }
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(()) // Nothing to initialize for in-memory store
    }

    async fn put(&mut self, key: &str, value: StoreData) -> Result<(), StorageError> {
        self.entry.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<StoreData>, StorageError> {
        Ok(self.entry.get(key).cloned())
    }

    async fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entry.remove(key);
        Ok(())
    }
}
