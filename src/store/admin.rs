//! Admin credential storage
//!
//! The pair is written with its default value on first access and only
//! ever overwritten wholesale; no UI wires a credential change.

use crate::error::Result;
use crate::store::kv::{KeyValueStore, ADMIN_KEY};
use crate::types::AdminCredential;

/// Read the stored credential, writing the default pair on first run.
///
/// Unparsable stored content falls back to the default without writing.
pub fn load_or_init(kv: &mut dyn KeyValueStore) -> Result<AdminCredential> {
    match kv.get(ADMIN_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
        None => {
            let credential = AdminCredential::default();
            save(kv, &credential)?;
            Ok(credential)
        }
    }
}

/// Overwrite the stored credential pair
pub fn save(kv: &mut dyn KeyValueStore, credential: &AdminCredential) -> Result<()> {
    kv.set(ADMIN_KEY, &serde_json::to_string(credential)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryKvStore;

    #[test]
    fn test_first_run_writes_default() {
        let mut kv = MemoryKvStore::new();
        let credential = load_or_init(&mut kv).unwrap();
        assert_eq!(credential, AdminCredential::default());
        assert!(kv.get(ADMIN_KEY).unwrap().is_some());
    }

    #[test]
    fn test_stored_pair_survives() {
        let mut kv = MemoryKvStore::new();
        let custom = AdminCredential {
            username: "chief".to_string(),
            password: "s3cret".to_string(),
        };
        save(&mut kv, &custom).unwrap();
        assert_eq!(load_or_init(&mut kv).unwrap(), custom);
    }

    #[test]
    fn test_corrupted_pair_falls_back_to_default() {
        let mut kv = MemoryKvStore::new();
        kv.set(ADMIN_KEY, "not json at all").unwrap();

        let credential = load_or_init(&mut kv).unwrap();
        assert_eq!(credential, AdminCredential::default());
        // The corrupted value is left in place, not overwritten
        assert_eq!(kv.get(ADMIN_KEY).unwrap().as_deref(), Some("not json at all"));
    }
}
