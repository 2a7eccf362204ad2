//! JSON file store

use crate::{FieldStore, StoreError};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

/// Store backed by a single JSON object file, rewritten on every write
#[derive(Debug)]
pub struct JsonFileFieldStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileFieldStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!("Opened field store at {} ({} entries)", path.display(), entries.len());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Replace through a sibling file so readers never see half a document
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl FieldStore for JsonFileFieldStore {
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

        // Only commit to memory what reached disk
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());
        self.persist(&updated)?;
        *entries = updated;

        debug!("Persisted field {} to {}", key, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileFieldStore::open(dir.path().join("fields.json")).unwrap();
        assert_eq!(store.get("nitrate").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("fields.json");

        let store = JsonFileFieldStore::open(&path).unwrap();
        store.set("nitrate", "\"0.48\"").unwrap();
        drop(store);

        let reopened = JsonFileFieldStore::open(&path).unwrap();
        assert_eq!(reopened.get("nitrate").unwrap().as_deref(), Some("\"0.48\""));
    }

    #[test]
    fn test_failed_write_leaves_value_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let store = JsonFileFieldStore::open(sub.join("fields.json")).unwrap();
        store.set("nitrate", "\"0.48\"").unwrap();

        // Turn the parent directory into a plain file so writes fail
        fs::remove_dir_all(&sub).unwrap();
        fs::write(&sub, "blocked").unwrap();

        assert!(store.set("nitrate", "\"9\"").is_err());
        assert!(store.set("calcium", "\"12.5\"").is_err());
        assert_eq!(store.get("nitrate").unwrap().as_deref(), Some("\"0.48\""));
        assert_eq!(store.get("calcium").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileFieldStore::open(&path),
            Err(StoreError::Serialization(_))
        ));
    }
}
