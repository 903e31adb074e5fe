//! String key-value persistence boundary
//!
//! The ledger keeps two JSON-encoded values under well-known keys.
//! `FileKvStore` maps each key to a file inside a data directory;
//! `MemoryKvStore` backs tests.

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key under which the delivery records are stored
pub const RECORDS_KEY: &str = "deliveries.json";

/// Key under which the admin credential pair is stored
pub const ADMIN_KEY: &str = "admin.json";

/// Opaque string key-value store
pub trait KeyValueStore {
    /// Read the last written value; None if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value wholesale
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store, one file per key
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Create or open a store directory
    pub fn open(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    values: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = tempdir().unwrap();
        let mut store = FileKvStore::open(temp_dir.path().to_path_buf()).unwrap();

        assert!(store.get(RECORDS_KEY).unwrap().is_none());

        store.set(RECORDS_KEY, "[1,2,3]").unwrap();
        assert_eq!(store.get(RECORDS_KEY).unwrap().as_deref(), Some("[1,2,3]"));

        // Overwrite replaces the value wholesale
        store.set(RECORDS_KEY, "[]").unwrap();
        assert_eq!(store.get(RECORDS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_keys_are_independent() {
        let temp_dir = tempdir().unwrap();
        let mut store = FileKvStore::open(temp_dir.path().to_path_buf()).unwrap();

        store.set(RECORDS_KEY, "records").unwrap();
        assert!(store.get(ADMIN_KEY).unwrap().is_none());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryKvStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
