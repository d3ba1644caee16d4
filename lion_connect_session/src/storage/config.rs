use crate::config::LC_CLIENT_STORE_URL;
use crate::storage::errors::StorageError;
use crate::storage::types::{ClientStore, FileClientStore, InMemoryClientStore};

/// Build a client store from a store URL.
///
/// Supported schemes:
/// * `memory://` - volatile, for tests and ephemeral processes
/// * `file://<path>` - single JSON document rewritten on each mutation
pub fn build_client_store(store_url: &str) -> Result<Box<dyn ClientStore>, StorageError> {
    match store_url.split_once("://") {
        Some(("memory", _)) => Ok(Box::new(InMemoryClientStore::new())),
        Some(("file", path)) if !path.is_empty() => {
            Ok(Box::new(FileClientStore::new(path.into())))
        }
        _ => Err(StorageError::InvalidUrl(store_url.to_string())),
    }
}

/// Build the client store named by `LC_CLIENT_STORE_URL`.
pub fn client_store_from_env() -> Result<Box<dyn ClientStore>, StorageError> {
    build_client_store(LC_CLIENT_STORE_URL.as_str())
}
