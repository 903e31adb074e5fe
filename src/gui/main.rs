//! GUI entry point for Entrega Log

mod admin_panel;
mod app;
mod register_panel;
mod view_panel;

use app::EntregaApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Entrega Log",
        options,
        Box::new(|cc| Ok(Box::new(EntregaApp::new(cc)))),
    )
}
