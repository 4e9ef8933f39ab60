//! Per-user key-value storage seam.
//!
//! Values are opaque strings (JSON in practice). Keys are scoped by a
//! namespace; the key within a namespace is the user id.

use crate::types::errors::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Namespace holding the last accepted inventory snapshot.
pub const SNAPSHOT_NAMESPACE: &str = "genshinData";
/// Namespace holding the serialized showcase selection.
pub const SHOWCASE_NAMESPACE: &str = "showcase";

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, namespace: &str, key: &str, value: &str) -> Result<(), StorageError>;

    async fn remove(&self, namespace: &str, key: &str) -> Result<(), StorageError>;
}

/// In-process store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<(String, String), String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    async fn set(&self, namespace: &str, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert((namespace.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    async fn remove(&self, namespace: &str, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&(namespace.to_string(), key.to_string()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/storage_tests.rs"]
mod tests;
