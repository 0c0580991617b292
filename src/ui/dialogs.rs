use std::path::{Path, PathBuf};

use crate::import::{FileChooser, LOAD_ERROR_TITLE};

// ---------------------------------------------------------------------------
// Native dialogs
// ---------------------------------------------------------------------------

/// File chooser backed by the platform's native open dialog, restricted to
/// hdf5 recon files. Blocks the UI thread until the user answers.
pub struct NativeFileChooser;

impl FileChooser for NativeFileChooser {
    fn pick_recon_file(&mut self, start_dir: &Path) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Please select an hdf5 recon file")
            .set_directory(start_dir)
            .add_filter("hdf5", &["h5", "hdf5"])
            .pick_file()
    }
}

/// Blocking error modal with a single OK button.
pub fn load_error(text: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(LOAD_ERROR_TITLE)
        .set_description(text)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
