//! Admin panel: login gate, then the full table with edit and delete

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use entrega_log::app::{AdminGate, LedgerService};

/// Panel for the credential-gated admin view
pub struct AdminPanel {
    /// Login form fields
    username_input: String,
    password_input: String,
    /// Record id awaiting delete confirmation
    confirm_delete: Option<String>,
    /// Edit request picked up by the app to switch tabs
    edit_request: Option<String>,
    /// Status message
    status_message: Option<(String, bool)>, // (message, is_error)
}

impl AdminPanel {
    pub fn new() -> Self {
        Self {
            username_input: String::new(),
            password_input: String::new(),
            confirm_delete: None,
            edit_request: None,
            status_message: None,
        }
    }

    /// Take the pending edit request, if any
    pub fn take_edit_request(&mut self) -> Option<String> {
        self.edit_request.take()
    }

    /// Render the panel UI
    pub fn ui(&mut self, ui: &mut Ui, service: &mut LedgerService, gate: &mut AdminGate) {
        if gate.is_logged_in() {
            self.render_admin_table(ui, service, gate);
            self.render_confirm_dialog(ui, service);
        } else {
            self.render_login(ui, gate);
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

    fn render_login(&mut self, ui: &mut Ui, gate: &mut AdminGate) {
        ui.heading("Admin login");
        ui.add_space(10.0);

        egui::Grid::new("admin_login_form")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("Username:");
                ui.add(egui::TextEdit::singleline(&mut self.username_input).desired_width(180.0));
                ui.end_row();

                ui.label("Password:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.password_input)
                        .password(true)
                        .desired_width(180.0),
                );
                ui.end_row();
            });

        ui.add_space(8.0);

        if ui.button("Log in").clicked() {
            match gate.login(&self.username_input, &self.password_input) {
                Ok(()) => {
                    self.username_input.clear();
                    self.password_input.clear();
                    self.status_message = None;
                }
                Err(e) => {
                    self.status_message = Some((e.to_string(), true));
                }
            }
        }
    }

    fn render_admin_table(&mut self, ui: &mut Ui, service: &mut LedgerService, gate: &mut AdminGate) {
        ui.horizontal(|ui| {
            ui.heading("Admin panel");
            ui.add_space(16.0);
            if ui.button("Log out").clicked() {
                gate.logout();
                self.status_message = None;
            }
        });
        ui.add_space(10.0);

        let records = service.records().to_vec();

        if records.is_empty() {
            ui.label(
                RichText::new("No deliveries registered")
                    .italics()
                    .color(Color32::GRAY),
            );
            return;
        }

        ui.label(format!("{} deliveries", records.len()));
        ui.add_space(5.0);

        ScrollArea::vertical()
            .max_height(ui.available_height() - 40.0)
            .show(ui, |ui| {
                egui::Grid::new("admin_table")
                    .num_columns(9)
                    .spacing([10.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        // Header
                        ui.label(RichText::new("ID").strong());
                        ui.label(RichText::new("Date").strong());
                        ui.label(RichText::new("Courier").strong());
                        ui.label(RichText::new("Amount").strong());
                        ui.label(RichText::new("Vehicle").strong());
                        ui.label(RichText::new("Address").strong());
                        ui.label(RichText::new("Recipient").strong());
                        ui.label("");
                        ui.label("");
                        ui.end_row();

                        for record in &records {
                            ui.label(short_id(&record.id));
                            ui.label(&record.date);
                            ui.label(&record.courier_name);
                            ui.label(&record.amount);
                            ui.label(record.vehicle.label());
                            ui.label(&record.address);
                            ui.label(&record.recipient_name);

                            if ui.small_button("Edit").clicked() {
                                self.edit_request = Some(record.id.clone());
                            }
                            if ui.small_button("Delete").clicked() {
                                self.confirm_delete = Some(record.id.clone());
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    fn render_confirm_dialog(&mut self, ui: &mut Ui, service: &mut LedgerService) {
        let Some(id) = self.confirm_delete.clone() else {
            return;
        };

        egui::Window::new("Confirm deletion")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ui.ctx(), |ui| {
                ui.label("Really delete this delivery record?");
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        match service.delete(&id) {
                            Ok(true) => {
                                self.status_message =
                                    Some(("Delivery deleted".to_string(), false));
                            }
                            Ok(false) => {
                                self.status_message =
                                    Some(("Delivery not found".to_string(), true));
                            }
                            Err(e) => {
                                self.status_message = Some((e.to_string(), true));
                            }
                        }
                        self.confirm_delete = None;
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_delete = None;
                    }
                });
            });
    }
}

/// Shortened id for table display
fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}

impl Default for AdminPanel {
    fn default() -> Self {
        Self::new()
    }
}
