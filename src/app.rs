use eframe::egui;

use crate::prefs::Prefs;
use crate::state::AppState;
use crate::ui::{panels, slice};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ReconImportApp {
    pub state: AppState,
}

impl ReconImportApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            state: AppState::new(Prefs::load(cc.storage)),
        }
    }
}

impl eframe::App for ReconImportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: published channels ----
        egui::SidePanel::left("channel_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: slice view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            slice::slice_view(ui, &mut self.state);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.state.prefs.store(storage);
    }
}
