//! Output formatting module

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::types::DeliveryRecord;

/// Shortened id for table display; JSON output keeps the full id
fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}

/// Render a record list to stdout
pub fn print_records(output_format: OutputFormat, records: &[DeliveryRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No deliveries found.");
        return Ok(());
    }

    println!("\nDeliveries ({})", records.len());
    println!(
        "{:<10} {:<12} {:<14} {:>10} {:<12} {:<12} {:<24} {:<14}",
        "ID", "Date", "Courier", "Amount", "Type", "Vehicle", "Address", "Recipient"
    );
    println!("{:-<112}", "");

    for record in records {
        println!(
            "{:<10} {:<12} {:<14} {:>10} {:<12} {:<12} {:<24} {:<14}",
            short_id(&record.id),
            record.date,
            record.courier_name,
            record.amount,
            record.delivery_type.label(),
            record.vehicle.label(),
            record.address,
            record.recipient_name,
        );
        if !record.note.is_empty() {
            println!("{:<10} note: {}", "", record.note);
        }
    }

    Ok(())
}
