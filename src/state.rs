use eframe::egui;

use crate::data::model::{Channel, ChannelList};
use crate::prefs::Prefs;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Channels published so far this session, in import order.
    pub channels: ChannelList,

    /// Index of the channel shown in the central view.
    pub selected: Option<usize>,

    /// Slice cursor into the selected channel (leading axis).
    pub slice_index: usize,

    /// Persisted preferences (last import folder).
    pub prefs: Prefs,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Uploaded texture for the currently viewed plane, keyed by
    /// (channel index, slice index) so it is rebuilt only on change.
    pub slice_texture: Option<egui::TextureHandle>,
    pub slice_texture_key: Option<(usize, usize)>,
}

impl AppState {
    pub fn new(prefs: Prefs) -> Self {
        Self {
            channels: ChannelList::default(),
            selected: None,
            slice_index: 0,
            prefs,
            status_message: None,
            slice_texture: None,
            slice_texture_key: None,
        }
    }

    /// Focus a published channel, starting the slice cursor mid-stack.
    pub fn select_channel(&mut self, index: usize) {
        if let Some(channel) = self.channels.get(index) {
            self.slice_index = channel.volume.depth() / 2;
            self.selected = Some(index);
        }
    }

    pub fn selected_channel(&self) -> Option<&Channel> {
        self.selected.and_then(|index| self.channels.get(index))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Prefs::default())
    }
}
