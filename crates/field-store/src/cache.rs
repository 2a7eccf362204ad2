//! Typed field cache

use crate::{FieldStore, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// JSON-encodes values on top of a string store
#[derive(Debug)]
pub struct FieldCache<S> {
    store: S,
}

impl<S: FieldStore> FieldCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored value for `key`, or `default` when absent or undecodable
    pub fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, StoreError> {
        let Some(text) = self.store.get(key)? else {
            return Ok(default);
        };

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("Ignoring undecodable value for {}: {}", key, e);
                Ok(default)
            }
        }
    }

    /// Encode and store `value` under `key`
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)?;
        self.store.set(key, &text)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
