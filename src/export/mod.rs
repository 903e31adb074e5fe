//! Export adapters for the delivery ledger

pub mod excel;

pub use excel::export_to_excel;
