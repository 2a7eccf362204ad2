//! Field Store
//!
//! Remembers form field values between visits: a plain string key-value
//! store with in-memory and JSON file backends, and a typed cache that
//! JSON-encodes each value.

mod cache;
mod file;
mod memory;

pub use cache::FieldCache;
pub use file::JsonFileFieldStore;
pub use memory::MemoryFieldStore;

use std::sync::Arc;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Lock error: {0}")]
    Lock(String),
}

/// String key-value store
pub trait FieldStore: Send + Sync {
    /// Stored value for `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: FieldStore + ?Sized> FieldStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<T: FieldStore + ?Sized> FieldStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
