//! CLI definition using clap

use crate::app::{InsertOrder, ValidationPolicy};
use crate::types::{DeliveryType, VehicleType};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for record listings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "entrega-log")]
#[command(version)]
#[command(about = "Delivery ledger with filtering, admin-gated editing and Excel export")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a delivery
    Add {
        /// Delivery date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Delivery amount
        #[arg(long)]
        amount: String,

        /// Delivery address
        #[arg(long)]
        address: String,

        /// Courier name
        #[arg(long)]
        courier: Option<String>,

        /// Delivery type
        #[arg(long, value_enum, default_value_t = DeliveryType::Local)]
        delivery_type: DeliveryType,

        /// Vehicle used
        #[arg(long, value_enum, default_value_t = VehicleType::Motorcycle)]
        vehicle: VehicleType,

        /// Recipient name
        #[arg(long)]
        recipient: Option<String>,

        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },

    /// List deliveries with optional filters
    List {
        /// Free-text search over courier, address, recipient and type
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// Only deliveries using this vehicle
        #[arg(long, value_enum)]
        vehicle: Option<VehicleType>,

        /// Lower date bound (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Upper date bound (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Exact delivery date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Export deliveries to an Excel file
    Export {
        /// Output .xlsx path
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// Free-text search over courier, address, recipient and type
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// Only deliveries using this vehicle
        #[arg(long, value_enum)]
        vehicle: Option<VehicleType>,

        /// Lower date bound (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Upper date bound (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Exact delivery date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Edit a delivery (admin only); unspecified fields keep their value
    Edit {
        /// Id of the delivery to edit
        id: String,

        /// Admin username
        #[arg(long, short = 'u')]
        username: String,

        /// Admin password
        #[arg(long, short = 'p')]
        password: String,

        /// New delivery date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New amount
        #[arg(long)]
        amount: Option<String>,

        /// New address
        #[arg(long)]
        address: Option<String>,

        /// New courier name
        #[arg(long)]
        courier: Option<String>,

        /// New delivery type
        #[arg(long, value_enum)]
        delivery_type: Option<DeliveryType>,

        /// New vehicle
        #[arg(long, value_enum)]
        vehicle: Option<VehicleType>,

        /// New recipient name
        #[arg(long)]
        recipient: Option<String>,

        /// New note
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete a delivery (admin only)
    Delete {
        /// Id of the delivery to delete
        id: String,

        /// Admin username
        #[arg(long, short = 'u')]
        username: String,

        /// Admin password
        #[arg(long, short = 'p')]
        password: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Check an admin credential pair
    Login {
        /// Admin username
        #[arg(long, short = 'u')]
        username: String,

        /// Admin password
        #[arg(long, short = 'p')]
        password: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set insertion order for new records
        #[arg(long, value_enum)]
        set_insert_order: Option<InsertOrder>,

        /// Set required-field enforcement on edits
        #[arg(long, value_enum)]
        set_validation: Option<ValidationPolicy>,

        /// Ask before deleting from the CLI
        #[arg(long)]
        set_confirm_delete: Option<bool>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
