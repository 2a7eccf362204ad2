//! In-memory store

use crate::{FieldStore, StoreError};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Store that lives as long as the process
#[derive(Debug, Default)]
pub struct MemoryFieldStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryFieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FieldStore for MemoryFieldStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;

        entries.insert(key.to_string(), value.to_string());
        debug!("Stored field {}", key);
        Ok(())
    }
}
