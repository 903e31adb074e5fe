//! Persistent store for delivery records
//!
//! The whole record list is serialized and rewritten after every
//! mutation; there is no incremental persistence.

pub mod admin;
pub mod kv;

pub use kv::{FileKvStore, KeyValueStore, MemoryKvStore, ADMIN_KEY, RECORDS_KEY};

use crate::error::Result;
use crate::types::DeliveryRecord;

/// In-memory record list mirrored to a key-value store
pub struct DeliveryStore {
    kv: Box<dyn KeyValueStore>,
    records: Vec<DeliveryRecord>,
}

impl DeliveryStore {
    /// Load the record list from the backing store.
    ///
    /// Absent or unparsable content yields an empty ledger; a corrupted
    /// value is never surfaced to the caller.
    pub fn open(kv: Box<dyn KeyValueStore>) -> Result<Self> {
        let records = match kv.get(RECORDS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { kv, records })
    }

    /// Serialize and overwrite the persisted value
    fn save(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.records)?;
        self.kv.set(RECORDS_KEY, &raw)
    }

    /// All records in stored order
    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&DeliveryRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Insert at `index` (clamped to the list length) and persist
    pub fn insert(&mut self, index: usize, record: DeliveryRecord) -> Result<()> {
        let index = index.min(self.records.len());
        self.records.insert(index, record);
        self.save()
    }

    /// Replace the record with matching id; false when absent
    pub fn replace(&mut self, id: &str, record: DeliveryRecord) -> Result<bool> {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                *slot = record;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record with matching id; false (and no write) when absent
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeliveryDraft;

    fn record(date: &str, address: &str) -> DeliveryRecord {
        DeliveryRecord::from_draft(DeliveryDraft {
            amount: "25.00".to_string(),
            date: date.to_string(),
            address: address.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_open_empty() {
        let store = DeliveryStore::open(Box::new(MemoryKvStore::new())).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let a = record("2024-01-01", "A St");
        let b = record("2024-02-01", "B Ave");

        {
            let kv = FileKvStore::open(temp_dir.path().to_path_buf()).unwrap();
            let mut store = DeliveryStore::open(Box::new(kv)).unwrap();
            store.insert(0, a.clone()).unwrap();
            store.insert(1, b.clone()).unwrap();
        }

        let kv = FileKvStore::open(temp_dir.path().to_path_buf()).unwrap();
        let reloaded = DeliveryStore::open(Box::new(kv)).unwrap();
        assert_eq!(reloaded.records(), &[a, b]);
    }

    #[test]
    fn test_corrupted_value_falls_back_to_empty() {
        let mut kv = MemoryKvStore::new();
        kv.set(RECORDS_KEY, "{not json").unwrap();

        let store = DeliveryStore::open(Box::new(kv)).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = DeliveryStore::open(Box::new(MemoryKvStore::new())).unwrap();
        let a = record("2024-01-01", "A St");
        store.insert(0, a.clone()).unwrap();

        assert!(!store.remove("no-such-id").unwrap());
        assert_eq!(store.records(), &[a]);
    }

    #[test]
    fn test_replace_preserves_position() {
        let mut store = DeliveryStore::open(Box::new(MemoryKvStore::new())).unwrap();
        let a = record("2024-01-01", "A St");
        let b = record("2024-02-01", "B Ave");
        store.insert(0, a.clone()).unwrap();
        store.insert(1, b.clone()).unwrap();

        let mut edited = a.clone();
        edited.address = "Elsewhere".to_string();
        assert!(store.replace(&a.id, edited.clone()).unwrap());
        assert_eq!(store.records(), &[edited, b]);
    }
}
