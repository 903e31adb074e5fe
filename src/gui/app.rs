//! Main application structure with tab navigation

use eframe::egui;
use entrega_log::app::{AdminGate, LedgerService, StoredCredentialProvider};
use entrega_log::config::Config;
use entrega_log::store::{admin, DeliveryStore, FileKvStore};

use crate::admin_panel::AdminPanel;
use crate::register_panel::RegisterPanel;
use crate::view_panel::ViewPanel;

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Register,
    View,
    Admin,
}

impl Tab {
    /// Get the display label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Register => "Register",
            Tab::View => "View",
            Tab::Admin => "Admin",
        }
    }
}

/// Main application state
pub struct EntregaApp {
    /// Currently selected tab
    current_tab: Tab,
    /// Register/edit form state
    register_panel: RegisterPanel,
    /// Filtered table view state
    view_panel: ViewPanel,
    /// Admin login/table state
    admin_panel: AdminPanel,
    /// CRUD controller over the persistent ledger
    service: LedgerService,
    /// Login session gating edit/delete
    gate: AdminGate,
}

impl EntregaApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Configure style for better responsiveness
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        // Load configuration
        let config = Config::load().unwrap_or_default();

        let data_dir = config
            .data_dir()
            .unwrap_or_else(|_| std::env::temp_dir().join("entrega-log"));

        // Open the ledger store
        let service = open_service(&config, data_dir.clone()).unwrap_or_else(|_| {
            let fallback_dir = std::env::temp_dir().join("entrega-log-fallback");
            open_service(&config, fallback_dir).expect("Failed to create fallback store")
        });

        // Load (or initialize) the admin credential pair
        let credential = FileKvStore::open(data_dir)
            .ok()
            .and_then(|mut kv| admin::load_or_init(&mut kv).ok())
            .unwrap_or_default();
        let gate = AdminGate::new(Box::new(StoredCredentialProvider::new(credential)));

        Self {
            current_tab: Tab::default(),
            register_panel: RegisterPanel::new(),
            view_panel: ViewPanel::new(),
            admin_panel: AdminPanel::new(),
            service,
            gate,
        }
    }

    /// Render the tab bar
    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            for tab in [Tab::Register, Tab::View, Tab::Admin] {
                let selected = self.current_tab == tab;
                if ui.selectable_label(selected, tab.label()).clicked() {
                    self.current_tab = tab;
                }
                ui.add_space(8.0);
            }
        });
    }
}

fn open_service(config: &Config, dir: std::path::PathBuf) -> entrega_log::error::Result<LedgerService> {
    let kv = FileKvStore::open(dir)?;
    let store = DeliveryStore::open(Box::new(kv))?;
    Ok(LedgerService::new(store)
        .with_insert_order(config.insert_order)
        .with_validation(config.validation))
}

impl eframe::App for EntregaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel with tab bar
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_tab_bar(ui);
            ui.add_space(4.0);
        });

        // Central panel with selected tab content
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.current_tab {
                Tab::Register => {
                    self.register_panel.ui(ui, &mut self.service);
                }
                Tab::View => {
                    self.view_panel.ui(ui, &mut self.service);
                }
                Tab::Admin => {
                    self.admin_panel.ui(ui, &mut self.service, &mut self.gate);
                    // An edit jumps to the register form with the record loaded
                    if let Some(id) = self.admin_panel.take_edit_request() {
                        if self.register_panel.begin_edit(&self.service, &id) {
                            self.current_tab = Tab::Register;
                        }
                    }
                }
            }
        });
    }
}
