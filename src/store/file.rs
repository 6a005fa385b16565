//! Single-file JSON store.

use super::KeyValueStore;
use crate::error::{FinwellError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Store backed by one JSON object file.
///
/// The whole file is rewritten on every mutation; the last writer wins. A
/// mutation whose write fails leaves the in-memory entries untouched. A
/// missing file opens empty. So does a corrupt one, with a warning, and the
/// next write replaces it.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. Never fails; see the type docs.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        "Ignoring unreadable progress file {}: {e}",
                        path.display()
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Cannot read progress file {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        tracing::debug!(
            "Opened progress store {} with {} entries",
            path.display(),
            entries.len()
        );
        Self { path, entries }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| FinwellError::io(parent, e))?;
        }
        let data = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, data).map_err(|e| FinwellError::io(&self.path, e))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("progress.json"));
        assert!(store.keys().is_empty());
    }

    #[test]
    fn test_writes_persist_and_create_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("progress.json");

        let mut store = JsonFileStore::open(&path);
        store.set("k", "v".to_string()).unwrap();
        assert!(path.exists());

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_corrupt_file_opens_empty_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = JsonFileStore::open(&path);
        assert!(store.keys().is_empty());
        store.set("k", "v".to_string()).unwrap();
        assert_eq!(JsonFileStore::open(&path).get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");
        let mut store = JsonFileStore::open(&path);
        store.set("a", "1".to_string()).unwrap();
        store.set("b", "2".to_string()).unwrap();
        store.remove("a").unwrap();
        assert_eq!(JsonFileStore::open(&path).keys(), ["b"]);
    }

    #[test]
    fn test_failed_set_keeps_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        // The parent is a regular file, so every write fails.
        let mut store = JsonFileStore::open(blocker.join("progress.json"));
        assert!(store.set("k", "v".to_string()).is_err());
        assert_eq!(store.get("k"), None);
        assert!(store.keys().is_empty());
    }

    #[test]
    fn test_failed_remove_keeps_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");
        let mut store = JsonFileStore::open(&path);
        store.set("k", "v".to_string()).unwrap();

        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        assert!(store.remove("k").is_err());
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
