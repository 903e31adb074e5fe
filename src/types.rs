//! Core types for the delivery ledger

use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Delivery type classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum DeliveryType {
    #[default]
    Local,
    LongDistance,
    Express,
    Other,
}

impl DeliveryType {
    pub const ALL: [DeliveryType; 4] = [
        DeliveryType::Local,
        DeliveryType::LongDistance,
        DeliveryType::Express,
        DeliveryType::Other,
    ];

    /// Display label, identical to the stored wire form
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryType::Local => "Local",
            DeliveryType::LongDistance => "LongDistance",
            DeliveryType::Express => "Express",
            DeliveryType::Other => "Other",
        }
    }
}

impl std::fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Vehicle used for a delivery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum VehicleType {
    #[default]
    Motorcycle,
    Car,
    Bicycle,
    Other,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Motorcycle,
        VehicleType::Car,
        VehicleType::Bicycle,
        VehicleType::Other,
    ];

    /// Display label, identical to the stored wire form
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::Car => "Car",
            VehicleType::Bicycle => "Bicycle",
            VehicleType::Other => "Other",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One delivery entry in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Unique identifier, stable for the record's lifetime
    pub id: String,

    /// Courier name (optional)
    #[serde(default)]
    pub courier_name: String,

    /// Delivery amount, kept as entered
    pub amount: String,

    /// Delivery type
    pub delivery_type: DeliveryType,

    /// Delivery date as entered (ISO `YYYY-MM-DD`); parsed leniently
    /// when filtering
    pub date: String,

    /// Vehicle used
    pub vehicle: VehicleType,

    /// Delivery address
    pub address: String,

    /// Who received the delivery (optional)
    #[serde(default)]
    pub recipient_name: String,

    /// Free-form note (optional)
    #[serde(default)]
    pub note: String,

    /// When the record was registered; set once, never mutated
    pub created_at: DateTime<Utc>,
}

impl DeliveryRecord {
    /// Build a record from a draft with a fresh id and creation timestamp
    pub fn from_draft(draft: DeliveryDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            courier_name: draft.courier_name,
            amount: draft.amount,
            delivery_type: draft.delivery_type,
            date: draft.date,
            vehicle: draft.vehicle,
            address: draft.address,
            recipient_name: draft.recipient_name,
            note: draft.note,
            created_at: Utc::now(),
        }
    }

    /// Apply a draft's fields onto this record, keeping `id` and
    /// `created_at`
    pub fn apply_draft(&mut self, draft: DeliveryDraft) {
        self.courier_name = draft.courier_name;
        self.amount = draft.amount;
        self.delivery_type = draft.delivery_type;
        self.date = draft.date;
        self.vehicle = draft.vehicle;
        self.address = draft.address;
        self.recipient_name = draft.recipient_name;
        self.note = draft.note;
    }

    /// Copy the editable fields into a draft (edit buffer)
    pub fn to_draft(&self) -> DeliveryDraft {
        DeliveryDraft {
            courier_name: self.courier_name.clone(),
            amount: self.amount.clone(),
            delivery_type: self.delivery_type,
            date: self.date.clone(),
            vehicle: self.vehicle,
            address: self.address.clone(),
            recipient_name: self.recipient_name.clone(),
            note: self.note.clone(),
        }
    }

    /// Parse the stored date; None for malformed input
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

/// Editable fields of a delivery, as entered in the register form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDraft {
    #[serde(default)]
    pub courier_name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub delivery_type: DeliveryType,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub vehicle: VehicleType,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub note: String,
}

impl DeliveryDraft {
    /// Names of required fields that are empty
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.date.trim().is_empty() {
            missing.push("date");
        }
        if self.amount.trim().is_empty() {
            missing.push("amount");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        missing
    }
}

/// Admin username/password pair, compared in plain text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredential {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredential {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}
