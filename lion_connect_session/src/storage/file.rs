use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::storage::errors::StorageError;
use crate::storage::types::{ClientStore, FileClientStore, StoreData};

impl FileClientStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        tracing::info!("Creating file client store at {}", path.display());
        Self { path }
    }

    async fn load(&self) -> Result<HashMap<String, String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| StorageError::Serialization(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(StorageError::Storage(e.to_string())),
        }
    }

    async fn save(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| StorageError::Storage(e.to_string()))
    }
}

#[async_trait]
impl ClientStore for FileClientStore {
    async fn init(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Storage(e.to_string()))?;
        }
        // Validate that an existing document parses
        self.load().await?;
        Ok(())
    }

    async fn put(&mut self, key: &str, value: StoreData) -> Result<(), StorageError> {
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.value);
        self.save(&entries).await
    }

    async fn get(&self, key: &str) -> Result<Option<StoreData>, StorageError> {
        let entries = self.load().await?;
        Ok(entries.get(key).map(|value| StoreData {
            value: value.clone(),
        }))
    }

    async fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.save(&entries).await?;
        }
        Ok(())
    }
}
