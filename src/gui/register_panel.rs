//! Register panel: create and edit delivery records

use eframe::egui::{self, Color32, RichText, Ui};
use entrega_log::app::LedgerService;
use entrega_log::types::{DeliveryDraft, DeliveryType, VehicleType};

/// Panel holding the create/edit form
pub struct RegisterPanel {
    /// Form contents
    draft: DeliveryDraft,
    /// Id of the record being edited, None when registering
    editing: Option<String>,
    /// Status message
    status_message: Option<(String, bool)>, // (message, is_error)
}

impl RegisterPanel {
    pub fn new() -> Self {
        Self {
            draft: DeliveryDraft::default(),
            editing: None,
            status_message: None,
        }
    }

    /// Load a record into the form; false when the id is unknown
    pub fn begin_edit(&mut self, service: &LedgerService, id: &str) -> bool {
        match service.start_edit(id) {
            Some(record) => {
                self.draft = record.to_draft();
                self.editing = Some(record.id);
                self.status_message = None;
                true
            }
            None => false,
        }
    }

    /// Render the panel UI
    pub fn ui(&mut self, ui: &mut Ui, service: &mut LedgerService) {
        let heading = if self.editing.is_some() {
            "Edit delivery"
        } else {
            "Register delivery"
        };
        ui.heading(heading);
        ui.add_space(10.0);

        egui::Grid::new("register_form")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("Courier:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.courier_name)
                        .hint_text("Courier name")
                        .desired_width(240.0),
                );
                ui.end_row();

                ui.label("Amount:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.amount)
                        .hint_text("Delivery amount")
                        .desired_width(120.0),
                );
                ui.end_row();

                ui.label("Type:");
                egui::ComboBox::from_id_salt("delivery_type")
                    .selected_text(self.draft.delivery_type.label())
                    .show_ui(ui, |ui| {
                        for delivery_type in DeliveryType::ALL {
                            ui.selectable_value(
                                &mut self.draft.delivery_type,
                                delivery_type,
                                delivery_type.label(),
                            );
                        }
                    });
                ui.end_row();

                ui.label("Date:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.date)
                        .hint_text("YYYY-MM-DD")
                        .desired_width(120.0),
                );
                ui.end_row();

                ui.label("Vehicle:");
                egui::ComboBox::from_id_salt("vehicle")
                    .selected_text(self.draft.vehicle.label())
                    .show_ui(ui, |ui| {
                        for vehicle in VehicleType::ALL {
                            ui.selectable_value(&mut self.draft.vehicle, vehicle, vehicle.label());
                        }
                    });
                ui.end_row();

                ui.label("Address:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.address)
                        .hint_text("Delivery address")
                        .desired_width(320.0),
                );
                ui.end_row();

                ui.label("Recipient:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.recipient_name)
                        .hint_text("Who received it")
                        .desired_width(240.0),
                );
                ui.end_row();

                ui.label("Note:");
                ui.add(
                    egui::TextEdit::multiline(&mut self.draft.note)
                        .desired_rows(2)
                        .desired_width(320.0),
                );
                ui.end_row();
            });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let submit_label = if self.editing.is_some() {
                "Save edit"
            } else {
                "Register"
            };
            if ui.button(submit_label).clicked() {
                self.submit(service);
            }

            if ui.button("Clear").clicked() {
                self.draft = DeliveryDraft::default();
                self.editing = None;
                self.status_message = None;
            }
        });

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

    fn submit(&mut self, service: &mut LedgerService) {
        let draft = self.draft.clone();
        let result = match self.editing {
            Some(ref id) => service.update(id, draft).map(|_| "Delivery updated".to_string()),
            None => service
                .add(draft)
                .map(|record| format!("Registered delivery {}", record.id)),
        };

        match result {
            Ok(msg) => {
                self.status_message = Some((msg, false));
                self.draft = DeliveryDraft::default();
                self.editing = None;
            }
            Err(e) => {
                self.status_message = Some((e.to_string(), true));
            }
        }
    }
}

impl Default for RegisterPanel {
    fn default() -> Self {
        Self::new()
    }
}
