//! Command handlers

use crate::app::{AdminGate, LedgerService, StoredCredentialProvider};
use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::domain::service::FilterCriteria;
use crate::error::{Error, Result};
use crate::export::export_to_excel;
use crate::output::print_records;
use crate::store::{admin, DeliveryStore, FileKvStore};
use crate::types::{DeliveryDraft, DeliveryType, VehicleType};
use chrono::NaiveDate;
use std::io::{self, Write};
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }

    match cli.command {
        Commands::Add {
            date,
            amount,
            address,
            courier,
            delivery_type,
            vehicle,
            recipient,
            note,
        } => {
            let draft = DeliveryDraft {
                courier_name: courier.unwrap_or_default(),
                amount,
                delivery_type,
                date,
                vehicle,
                address,
                recipient_name: recipient.unwrap_or_default(),
                note: note.unwrap_or_default(),
            };
            cmd_add(&config, draft)
        }

        Commands::List {
            query,
            vehicle,
            from,
            to,
            date,
        } => {
            let criteria = criteria_from_flags(query, vehicle, from, to, date);
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_list(&config, &criteria, output_format)
        }

        Commands::Export {
            output,
            query,
            vehicle,
            from,
            to,
            date,
        } => {
            let criteria = criteria_from_flags(query, vehicle, from, to, date);
            cmd_export(&config, &criteria, output)
        }

        Commands::Edit {
            id,
            username,
            password,
            date,
            amount,
            address,
            courier,
            delivery_type,
            vehicle,
            recipient,
            note,
        } => cmd_edit(
            &config,
            &id,
            &username,
            &password,
            EditFields {
                date,
                amount,
                address,
                courier,
                delivery_type,
                vehicle,
                recipient,
                note,
            },
        ),

        Commands::Delete {
            id,
            username,
            password,
            yes,
        } => cmd_delete(&config, &id, &username, &password, yes),

        Commands::Login { username, password } => cmd_login(&config, &username, &password),

        Commands::Config {
            show,
            set_insert_order,
            set_validation,
            set_confirm_delete,
            set_output,
            reset,
        } => cmd_config(
            show,
            set_insert_order,
            set_validation,
            set_confirm_delete,
            set_output,
            reset,
        ),
    }
}

/// Optional replacement values for an admin edit
struct EditFields {
    date: Option<String>,
    amount: Option<String>,
    address: Option<String>,
    courier: Option<String>,
    delivery_type: Option<DeliveryType>,
    vehicle: Option<VehicleType>,
    recipient: Option<String>,
    note: Option<String>,
}

fn criteria_from_flags(
    query: Option<String>,
    vehicle: Option<VehicleType>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    date: Option<NaiveDate>,
) -> FilterCriteria {
    FilterCriteria {
        query: query.unwrap_or_default(),
        vehicle,
        date_from: from,
        date_to: to,
        date_exact: date,
    }
}

fn open_service(config: &Config) -> Result<LedgerService> {
    let kv = FileKvStore::open(config.data_dir()?)?;
    let store = DeliveryStore::open(Box::new(kv))?;
    Ok(LedgerService::new(store)
        .with_insert_order(config.insert_order)
        .with_validation(config.validation))
}

fn open_gate(config: &Config) -> Result<AdminGate> {
    let mut kv = FileKvStore::open(config.data_dir()?)?;
    let credential = admin::load_or_init(&mut kv)?;
    Ok(AdminGate::new(Box::new(StoredCredentialProvider::new(
        credential,
    ))))
}

fn cmd_add(config: &Config, draft: DeliveryDraft) -> Result<()> {
    let mut service = open_service(config)?;
    let record = service.add(draft)?;
    println!("Registered delivery {}", record.id);
    Ok(())
}

fn cmd_list(config: &Config, criteria: &FilterCriteria, output_format: OutputFormat) -> Result<()> {
    let service = open_service(config)?;
    let records = service.filtered(criteria);
    print_records(output_format, &records)
}

fn cmd_export(config: &Config, criteria: &FilterCriteria, output: PathBuf) -> Result<()> {
    let service = open_service(config)?;
    let records = service.filtered(criteria);
    export_to_excel(&records, &output)?;
    println!(
        "Exported {} record(s) to {}",
        records.len(),
        output.display()
    );
    Ok(())
}

fn cmd_edit(
    config: &Config,
    id: &str,
    username: &str,
    password: &str,
    fields: EditFields,
) -> Result<()> {
    let mut gate = open_gate(config)?;
    gate.login(username, password)?;

    let mut service = open_service(config)?;
    let Some(current) = service.start_edit(id) else {
        return Err(Error::NotFound(id.to_string()));
    };

    let mut draft = current.to_draft();
    if let Some(date) = fields.date {
        draft.date = date;
    }
    if let Some(amount) = fields.amount {
        draft.amount = amount;
    }
    if let Some(address) = fields.address {
        draft.address = address;
    }
    if let Some(courier) = fields.courier {
        draft.courier_name = courier;
    }
    if let Some(delivery_type) = fields.delivery_type {
        draft.delivery_type = delivery_type;
    }
    if let Some(vehicle) = fields.vehicle {
        draft.vehicle = vehicle;
    }
    if let Some(recipient) = fields.recipient {
        draft.recipient_name = recipient;
    }
    if let Some(note) = fields.note {
        draft.note = note;
    }

    service.update(id, draft)?;
    println!("Updated delivery {}", id);
    Ok(())
}

fn cmd_delete(config: &Config, id: &str, username: &str, password: &str, yes: bool) -> Result<()> {
    let mut gate = open_gate(config)?;
    gate.login(username, password)?;

    let mut service = open_service(config)?;
    let skip_prompt = yes || !config.confirm_delete;
    let removed = if skip_prompt {
        service.delete(id)?
    } else {
        service.delete_confirmed(id, |record| {
            print!(
                "Delete delivery {} ({} / {})? [y/N] ",
                record.id, record.date, record.address
            );
            let _ = io::stdout().flush();
            let mut answer = String::new();
            if io::stdin().read_line(&mut answer).is_err() {
                return false;
            }
            matches!(answer.trim(), "y" | "Y" | "yes")
        })?
    };

    if removed {
        println!("Deleted delivery {}", id);
    } else {
        println!("Nothing deleted");
    }
    Ok(())
}

fn cmd_login(config: &Config, username: &str, password: &str) -> Result<()> {
    let mut gate = open_gate(config)?;
    gate.login(username, password)?;
    println!("Login OK");
    Ok(())
}

fn cmd_config(
    show: bool,
    set_insert_order: Option<crate::app::InsertOrder>,
    set_validation: Option<crate::app::ValidationPolicy>,
    set_confirm_delete: Option<bool>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(order) = set_insert_order {
        config.insert_order = order;
        changed = true;
    }
    if let Some(policy) = set_validation {
        config.validation = policy;
        changed = true;
    }
    if let Some(confirm) = set_confirm_delete {
        config.confirm_delete = confirm;
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
