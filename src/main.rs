mod app;
mod data;
mod import;
mod menu;
mod prefs;
mod state;
mod ui;

use app::ReconImportApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MCT Recon Import",
        options,
        Box::new(|cc| Ok(Box::new(ReconImportApp::new(cc)))),
    )
}
