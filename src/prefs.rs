use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Persisted preferences
// ---------------------------------------------------------------------------

/// Fixed identifier under which preferences live in the host's key/value
/// storage.
pub const STORAGE_KEY: &str = "mct-recon-import";

/// Import dialog starting point until a folder has been remembered.
pub const DEFAULT_IMPORT_DIR: &str = "/data/mct";

/// User preferences surviving across sessions. Read once when the app starts,
/// mutated in memory, flushed back to storage by the eframe save hook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prefs {
    /// Directory of the most recently imported recon file.
    pub import_folder: Option<PathBuf>,
}

impl Prefs {
    /// Restore preferences from host storage (missing or unreadable → defaults).
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|s| eframe::get_value(s, STORAGE_KEY))
            .unwrap_or_default()
    }

    /// Write preferences back to host storage.
    pub fn store(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, STORAGE_KEY, self);
    }

    /// Where the import dialog should open.
    pub fn import_dir(&self) -> &Path {
        self.import_folder
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_IMPORT_DIR))
    }

    /// Remember the folder of a confirmed file choice for next time.
    pub fn remember_import_dir(&mut self, chosen_file: &Path) {
        if let Some(parent) = chosen_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.import_folder = Some(parent.to_path_buf());
        }
    }
}
