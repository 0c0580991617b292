use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::import::{self, ImportOutcome};
use crate::menu;
use crate::state::AppState;
use crate::ui::dialogs;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the menu bar from the registered actions, plus a status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        for category in menu::categories() {
            ui.menu_button(category, |ui: &mut Ui| {
                for action in menu::actions_in(category) {
                    if ui.button(action.label).clicked() {
                        (action.run)(state);
                        ui.close_menu();
                    }
                }
            });
        }

        ui.separator();

        ui.label(format!("{} channel(s)", state.channels.len()));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – published channels
// ---------------------------------------------------------------------------

/// Render the channel list and the selected channel's details.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Channels");
    ui.separator();

    if state.channels.is_empty() {
        ui.label("No channels yet.  MCT → Import MCT Recon…");
        return;
    }

    let mut clicked = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, channel) in state.channels.iter().enumerate() {
                let is_selected = state.selected == Some(idx);
                if ui.selectable_label(is_selected, &channel.title).clicked() {
                    clicked = Some(idx);
                }
            }

            if let Some(channel) = state.selected_channel() {
                ui.separator();
                ui.strong(&channel.title);
                ui.label(format!("shape    {:?}", channel.volume.shape()));
                ui.label(format!("type     {}", channel.volume.element_type()));
                ui.label(format!("spacing  {}", channel.spacing));
            }
        });

    if let Some(idx) = clicked {
        state.select_channel(idx);
    }
}

// ---------------------------------------------------------------------------
// Menu entry points
// ---------------------------------------------------------------------------

/// Entry point of the `MCT → Import MCT Recon...` action.
pub fn run_import_action(state: &mut AppState) {
    let mut chooser = dialogs::NativeFileChooser;
    match import::import_recon(&mut chooser, &mut state.prefs, &mut state.channels) {
        Ok(ImportOutcome::Imported { index }) => {
            state.status_message = None;
            state.select_channel(index);
            if let Some(channel) = state.channels.get(index) {
                log::info!(
                    "published channel '{}' ({:?}, {})",
                    channel.title,
                    channel.volume.shape(),
                    channel.volume.element_type()
                );
            }
        }
        Ok(ImportOutcome::NoVolumeFound) => {
            dialogs::load_error(import::NO_VOLUME_MESSAGE);
        }
        Ok(ImportOutcome::Cancelled) => {}
        Err(e) => {
            // No handler wraps the load itself; read failures land on the
            // host's default error surface.
            log::error!("import failed: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
