use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::storage::errors::StorageError;

/// A single value held by the durable client store. Always a string;
/// typed records are converted through serde_json by their owners.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreData {
    pub value: String,
}

pub(crate) struct InMemoryClientStore {
    pub(super) entry: HashMap<String, StoreData>,
}

pub(crate) struct FileClientStore {
    pub(super) path: PathBuf,
}

/// Durable, per-origin client storage shared by all parts of the session
/// subsystem. Survives process restarts; the access token is never
/// written here.
#[async_trait]
pub trait ClientStore: Send + Sync + 'static {
    /// Initialize the store. Called once when the store is created.
    async fn init(&self) -> Result<(), StorageError>;

    /// Put a value into the store, overwriting any existing one.
    async fn put(&mut self, key: &str, value: StoreData) -> Result<(), StorageError>;

    /// Get a value from the store.
    async fn get(&self, key: &str) -> Result<Option<StoreData>, StorageError>;

    /// Remove a value from the store.
    async fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
