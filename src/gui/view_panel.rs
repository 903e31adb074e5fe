//! View panel: filtered read-only table with Excel export

use chrono::NaiveDate;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use entrega_log::app::LedgerService;
use entrega_log::domain::service::FilterCriteria;
use entrega_log::export::export_to_excel;
use entrega_log::types::{DeliveryRecord, VehicleType};

/// Panel showing the filtered delivery table
pub struct ViewPanel {
    /// Free-text search input
    query: String,
    /// Vehicle selector, None = all
    vehicle: Option<VehicleType>,
    /// Date bound inputs, kept as text and parsed leniently
    date_from: String,
    date_to: String,
    date_exact: String,
    /// Status message
    status_message: Option<(String, bool)>, // (message, is_error)
}

impl ViewPanel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            vehicle: None,
            date_from: String::new(),
            date_to: String::new(),
            date_exact: String::new(),
            status_message: None,
        }
    }

    /// Build criteria from the form inputs; invalid date text is ignored
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone(),
            vehicle: self.vehicle,
            date_from: parse_date(&self.date_from),
            date_to: parse_date(&self.date_to),
            date_exact: parse_date(&self.date_exact),
        }
    }

    /// Render the panel UI
    pub fn ui(&mut self, ui: &mut Ui, service: &mut LedgerService) {
        ui.heading("Deliveries");
        ui.add_space(10.0);

        self.render_filter_bar(ui);
        ui.add_space(8.0);

        let records = service.filtered(&self.criteria());

        ui.horizontal(|ui| {
            ui.label(format!(
                "Showing {} of {} deliveries",
                records.len(),
                service.count()
            ));
            ui.add_space(16.0);
            if ui.button("Export to Excel...").clicked() {
                self.export(&records);
            }
        });

        ui.add_space(5.0);

        if records.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("No deliveries found").color(Color32::GRAY));
            });
        } else {
            self.render_table(ui, &records);
        }

        if let Some((ref msg, is_error)) = self.status_message {
            ui.add_space(10.0);
            let color = if is_error {
                Color32::LIGHT_RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    }

    fn render_filter_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("courier, address, recipient...")
                    .desired_width(220.0),
            );

            ui.add_space(12.0);
            ui.label("Vehicle:");
            egui::ComboBox::from_id_salt("vehicle_filter")
                .selected_text(self.vehicle.map(|v| v.label()).unwrap_or("All"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.vehicle, None, "All");
                    for vehicle in VehicleType::ALL {
                        ui.selectable_value(&mut self.vehicle, Some(vehicle), vehicle.label());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("From:");
            ui.add(
                egui::TextEdit::singleline(&mut self.date_from)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(100.0),
            );
            ui.label("To:");
            ui.add(
                egui::TextEdit::singleline(&mut self.date_to)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(100.0),
            );
            ui.label("Exact date:");
            ui.add(
                egui::TextEdit::singleline(&mut self.date_exact)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(100.0),
            );

            ui.add_space(12.0);
            if ui.button("Clear filters").clicked() {
                self.query.clear();
                self.vehicle = None;
                self.date_from.clear();
                self.date_to.clear();
                self.date_exact.clear();
            }
        });
    }

    fn render_table(&mut self, ui: &mut Ui, records: &[DeliveryRecord]) {
        ScrollArea::vertical()
            .max_height(ui.available_height() - 60.0)
            .show(ui, |ui| {
                egui::Grid::new("view_table")
                    .num_columns(7)
                    .spacing([10.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        // Header
                        ui.label(RichText::new("Date").strong());
                        ui.label(RichText::new("Courier").strong());
                        ui.label(RichText::new("Amount").strong());
                        ui.label(RichText::new("Vehicle").strong());
                        ui.label(RichText::new("Address").strong());
                        ui.label(RichText::new("Recipient").strong());
                        ui.label(RichText::new("Note").strong());
                        ui.end_row();

                        for record in records {
                            ui.label(&record.date);
                            ui.label(&record.courier_name);
                            ui.label(&record.amount);
                            ui.label(record.vehicle.label());
                            ui.label(&record.address);
                            ui.label(&record.recipient_name);
                            ui.label(&record.note);
                            ui.end_row();
                        }
                    });
            });
    }

    fn export(&mut self, records: &[DeliveryRecord]) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Excel", &["xlsx"])
            .set_file_name("deliveries.xlsx")
            .save_file()
        else {
            return;
        };

        match export_to_excel(records, &path) {
            Ok(()) => {
                self.status_message =
                    Some((format!("Exported {} record(s)", records.len()), false));
            }
            Err(e) => {
                self.status_message = Some((e.to_string(), true));
            }
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

impl Default for ViewPanel {
    fn default() -> Self {
        Self::new()
    }
}
