//! Excel export functionality

use crate::error::{Error, Result};
use crate::types::DeliveryRecord;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Column headers, in sheet order
const HEADERS: [&str; 10] = [
    "ID",
    "Courier",
    "Amount",
    "Type",
    "Date",
    "Vehicle",
    "Address",
    "Recipient",
    "Note",
    "CreatedAt",
];

/// Export `records` to a single-sheet Excel file.
///
/// The caller chooses the record set (full or currently filtered). An
/// empty set produces no file.
pub fn export_to_excel(records: &[DeliveryRecord], output_path: &Path) -> Result<()> {
    if records.is_empty() {
        return Err(Error::ExportEmpty);
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("Deliveries")
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Header row
    let header_format = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    // Data rows
    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let cells = [
            record.id.as_str(),
            record.courier_name.as_str(),
            record.amount.as_str(),
            record.delivery_type.label(),
            record.date.as_str(),
            record.vehicle.label(),
            record.address.as_str(),
            record.recipient_name.as_str(),
            record.note.as_str(),
        ];
        for (col, value) in cells.iter().enumerate() {
            sheet
                .write_string(row, col as u16, *value)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
        sheet
            .write_string(row, 9, record.created_at.to_rfc3339())
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    // Widen the text-heavy columns
    sheet
        .set_column_width(0, 36)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(6, 30)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(8, 40)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(9, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeliveryDraft, DeliveryRecord};
    use tempfile::tempdir;

    fn record(address: &str) -> DeliveryRecord {
        DeliveryRecord::from_draft(DeliveryDraft {
            amount: "12.50".to_string(),
            date: "2024-03-15".to_string(),
            address: address.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_export_empty_produces_no_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("empty.xlsx");

        let err = export_to_excel(&[], &path).unwrap_err();
        assert!(matches!(err, Error::ExportEmpty));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_writes_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("deliveries.xlsx");

        let records = vec![record("A St"), record("B Ave")];
        export_to_excel(&records, &path).unwrap();
        assert!(path.exists());
    }
}
