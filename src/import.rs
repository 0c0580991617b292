use std::path::{Path, PathBuf};

use crate::data::loader::{self, LoadError, LoadedVolume};
use crate::data::model::{Channel, ChannelList};
use crate::data::resolver;
use crate::prefs::Prefs;

// ---------------------------------------------------------------------------
// Import orchestration
// ---------------------------------------------------------------------------

/// Title of the blocking modal shown when no volume dataset is found.
pub const LOAD_ERROR_TITLE: &str = "Load Error";

/// Fixed text of that modal.
pub const NO_VOLUME_MESSAGE: &str = "No hdf5 path /data or /MCT/DATA found";

/// Source of the user's file choice. The production implementation is a
/// native dialog ([`crate::ui::dialogs::NativeFileChooser`]); tests script it.
pub trait FileChooser {
    /// Prompt for a single `.h5`/`.hdf5` file, starting in `start_dir`.
    /// `None` means the user cancelled.
    fn pick_recon_file(&mut self, start_dir: &Path) -> Option<PathBuf>;
}

/// How an import attempt ended. Read failures are not an outcome: they
/// surface as `Err` and are left to the host's default error handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// A channel was published at this index in the channel list.
    Imported { index: usize },
    /// The chosen file holds neither known volume location; nothing was
    /// loaded or published. The caller shows the fixed error modal.
    NoVolumeFound,
    /// The user dismissed the file prompt; nothing happened.
    Cancelled,
}

/// Run one import: prompt → resolve → load → publish.
///
/// The last-used folder is read from `prefs` before the prompt and updated
/// immediately after a confirmed choice (also when the file later turns out
/// not to hold a volume). Cancelling leaves `prefs` untouched. Everything is
/// synchronous and runs on the calling thread.
pub fn import_recon(
    chooser: &mut dyn FileChooser,
    prefs: &mut Prefs,
    channels: &mut ChannelList,
) -> Result<ImportOutcome, LoadError> {
    let start_dir = prefs.import_dir().to_path_buf();
    let Some(filepath) = chooser.pick_recon_file(&start_dir) else {
        return Ok(ImportOutcome::Cancelled);
    };
    prefs.remember_import_dir(&filepath);

    // Recon files keep the volume in one of a couple of locations; take the
    // first that exists.
    let Some(h5_path) = resolver::resolve_volume_path(&filepath)? else {
        return Ok(ImportOutcome::NoVolumeFound);
    };

    let LoadedVolume { data, spacing } = loader::load_volume(&filepath, h5_path)?;

    let mut channel = Channel::from_volume(data);
    channel.set_title(display_title(&filepath));
    channel.set_spacing(spacing);
    let index = channels.publish(channel);
    Ok(ImportOutcome::Imported { index })
}

/// Channel title: the source file's base name with the extension stripped.
fn display_title(filepath: &Path) -> String {
    filepath
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
