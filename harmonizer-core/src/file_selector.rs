//! # File Selector
//!
//! Wraps the host file picker and enforces the `.wav` rule before a path
//! reaches [`FormState`]. The picker's own extension filter is only a hint;
//! the check here is what keeps the form state valid.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{HarmonizerError, Result};
use crate::form::FormState;

/// Label and extension handed to the host dialog as a filter hint.
pub const WAV_FILTER_NAME: &str = "WAV Files";
pub const WAV_EXTENSION: &str = "wav";

/// Something that can ask the user for a single file.
///
/// Returns `None` when the user cancels.
pub trait FilePicker {
    fn pick_wav_file(&self) -> Option<PathBuf>;
}

/// True when the file name ends in `.wav`, in any letter case.
pub fn is_wav_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".wav"))
        .unwrap_or(false)
}

/// Asks `picker` for a file and stores it in `state` if it is a `.wav`.
///
/// # Returns
/// * `Ok(Some(path))` - accepted and stored
/// * `Ok(None)` - the dialog was cancelled, state untouched
/// * `Err(InvalidFileSelection)` - wrong extension, state untouched
pub fn choose_file(picker: &dyn FilePicker, state: &mut FormState) -> Result<Option<PathBuf>> {
    let Some(path) = picker.pick_wav_file() else {
        info!("File selection cancelled");
        return Ok(None);
    };

    if !is_wav_file(&path) {
        warn!(path = %path.display(), "Rejected non-wav selection");
        return Err(HarmonizerError::InvalidFileSelection(path));
    }

    info!(path = %path.display(), "Selected input file");
    state.selected_file_path = Some(path.clone());
    Ok(Some(path))
}
