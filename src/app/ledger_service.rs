//! Ledger service wrapping the record store with add/update/delete
//! semantics and the configurable ordering and validation policies.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::service::{filter_records, FilterCriteria};
use crate::error::{Error, Result, ValidationError};
use crate::store::DeliveryStore;
use crate::types::{DeliveryDraft, DeliveryRecord};

/// Where newly registered records land in the ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertOrder {
    /// Prepend, so the table shows the newest delivery first
    #[default]
    NewestFirst,
    /// Append in registration order
    Append,
}

impl std::fmt::Display for InsertOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsertOrder::NewestFirst => write!(f, "newest-first"),
            InsertOrder::Append => write!(f, "append"),
        }
    }
}

/// When required fields are enforced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// Only `add` checks required fields; an edit may blank them out
    #[default]
    CreateOnly,
    /// `update` re-checks the same required fields
    Always,
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationPolicy::CreateOnly => write!(f, "create-only"),
            ValidationPolicy::Always => write!(f, "always"),
        }
    }
}

/// CRUD controller over the delivery store
pub struct LedgerService {
    store: DeliveryStore,
    insert_order: InsertOrder,
    validation: ValidationPolicy,
}

impl LedgerService {
    pub fn new(store: DeliveryStore) -> Self {
        Self {
            store,
            insert_order: InsertOrder::default(),
            validation: ValidationPolicy::default(),
        }
    }

    pub fn with_insert_order(mut self, order: InsertOrder) -> Self {
        self.insert_order = order;
        self
    }

    pub fn with_validation(mut self, policy: ValidationPolicy) -> Self {
        self.validation = policy;
        self
    }

    /// Register a new delivery.
    ///
    /// Rejects drafts with an empty date, amount or address; on success
    /// the record gets a fresh unique id and creation timestamp.
    pub fn add(&mut self, draft: DeliveryDraft) -> Result<DeliveryRecord> {
        let missing = draft.missing_required();
        if !missing.is_empty() {
            return Err(ValidationError { fields: missing }.into());
        }

        let record = DeliveryRecord::from_draft(draft);
        let index = match self.insert_order {
            InsertOrder::NewestFirst => 0,
            InsertOrder::Append => self.store.len(),
        };
        self.store.insert(index, record.clone())?;
        Ok(record)
    }

    /// Replace all editable fields of the record with `id`.
    ///
    /// Required fields are re-checked only under
    /// `ValidationPolicy::Always`.
    pub fn update(&mut self, id: &str, draft: DeliveryDraft) -> Result<()> {
        if self.validation == ValidationPolicy::Always {
            let missing = draft.missing_required();
            if !missing.is_empty() {
                return Err(ValidationError { fields: missing }.into());
            }
        }

        let Some(mut record) = self.store.get(id).cloned() else {
            return Err(Error::NotFound(id.to_string()));
        };
        record.apply_draft(draft);
        self.store.replace(id, record)?;
        Ok(())
    }

    /// Remove the record with `id`; Ok(false) when absent
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        self.store.remove(id)
    }

    /// Remove after the confirmation callback approves.
    ///
    /// Ok(false) when the callback declines or the id is absent; the
    /// callback is not invoked for an absent id.
    pub fn delete_confirmed(
        &mut self,
        id: &str,
        confirm: impl FnOnce(&DeliveryRecord) -> bool,
    ) -> Result<bool> {
        let Some(record) = self.store.get(id).cloned() else {
            return Ok(false);
        };
        if !confirm(&record) {
            return Ok(false);
        }
        self.store.remove(id)
    }

    /// Fetch a record into an edit buffer; None when absent
    pub fn start_edit(&self, id: &str) -> Option<DeliveryRecord> {
        self.store.get(id).cloned()
    }

    /// All records in stored order
    pub fn records(&self) -> &[DeliveryRecord] {
        self.store.records()
    }

    /// Visible subset under `criteria`
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<DeliveryRecord> {
        filter_records(self.store.records(), criteria)
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryKvStore;

    fn service() -> LedgerService {
        let store = DeliveryStore::open(Box::new(MemoryKvStore::new())).unwrap();
        LedgerService::new(store)
    }

    fn draft(date: &str, amount: &str, address: &str) -> DeliveryDraft {
        DeliveryDraft {
            date: date.to_string(),
            amount: amount.to_string(),
            address: address.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut service = service();
        let a = service.add(draft("2024-01-01", "10", "A St")).unwrap();
        let b = service.add(draft("2024-01-01", "10", "A St")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(service.count(), 2);
    }

    #[test]
    fn test_add_rejects_missing_required_fields() {
        let mut service = service();
        let err = service.add(draft("", "10", "")).unwrap_err();
        match err {
            Error::Validation(v) => assert_eq!(v.fields, vec!["date", "address"]),
            other => panic!("expected validation error, got {other}"),
        }
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_newest_first_prepends() {
        let mut service = service();
        let first = service.add(draft("2024-01-01", "10", "A St")).unwrap();
        let second = service.add(draft("2024-01-02", "10", "B Ave")).unwrap();
        let ids: Vec<_> = service.records().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_append_keeps_registration_order() {
        let store = DeliveryStore::open(Box::new(MemoryKvStore::new())).unwrap();
        let mut service = LedgerService::new(store).with_insert_order(InsertOrder::Append);
        let first = service.add(draft("2024-01-01", "10", "A St")).unwrap();
        let second = service.add(draft("2024-01-02", "10", "B Ave")).unwrap();
        let ids: Vec<_> = service.records().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_update_preserves_id_and_created_at() {
        let mut service = service();
        let record = service.add(draft("2024-01-01", "10", "A St")).unwrap();

        let mut edit = record.to_draft();
        edit.address = "Moved".to_string();
        edit.courier_name = "Bob".to_string();
        service.update(&record.id, edit).unwrap();

        let updated = service.start_edit(&record.id).unwrap();
        assert_eq!(updated.id, record.id);
        assert_eq!(updated.created_at, record.created_at);
        assert_eq!(updated.address, "Moved");
        assert_eq!(updated.courier_name, "Bob");
    }

    #[test]
    fn test_update_missing_id_errors() {
        let mut service = service();
        let err = service
            .update("ghost", draft("2024-01-01", "10", "A St"))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_create_only_policy_allows_blanking_on_edit() {
        let mut service = service();
        let record = service.add(draft("2024-01-01", "10", "A St")).unwrap();

        let mut edit = record.to_draft();
        edit.address = String::new();
        service.update(&record.id, edit).unwrap();
        assert_eq!(service.start_edit(&record.id).unwrap().address, "");
    }

    #[test]
    fn test_always_policy_rejects_blanking_on_edit() {
        let store = DeliveryStore::open(Box::new(MemoryKvStore::new())).unwrap();
        let mut service = LedgerService::new(store).with_validation(ValidationPolicy::Always);
        let record = service.add(draft("2024-01-01", "10", "A St")).unwrap();

        let mut edit = record.to_draft();
        edit.address = String::new();
        let err = service.update(&record.id, edit).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(service.start_edit(&record.id).unwrap().address, "A St");
    }

    #[test]
    fn test_delete_then_lookup_is_not_found() {
        let mut service = service();
        let record = service.add(draft("2024-01-01", "10", "A St")).unwrap();

        assert!(service.delete(&record.id).unwrap());
        assert!(service.start_edit(&record.id).is_none());

        // Deleting again is a no-op
        assert!(!service.delete(&record.id).unwrap());
    }

    #[test]
    fn test_delete_confirmed_declined_keeps_record() {
        let mut service = service();
        let record = service.add(draft("2024-01-01", "10", "A St")).unwrap();

        assert!(!service.delete_confirmed(&record.id, |_| false).unwrap());
        assert_eq!(service.count(), 1);

        assert!(service.delete_confirmed(&record.id, |_| true).unwrap());
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_start_edit_missing_id_is_none() {
        let service = service();
        assert!(service.start_edit("ghost").is_none());
    }
}
