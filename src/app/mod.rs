//! Application services: CRUD controller and admin gate

pub mod admin_gate;
pub mod ledger_service;

pub use admin_gate::{AdminGate, AuthProvider, StoredCredentialProvider};
pub use ledger_service::{InsertOrder, LedgerService, ValidationPolicy};
