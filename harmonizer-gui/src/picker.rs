//! Host dialogs backed by `rfd`.

use std::path::PathBuf;

use harmonizer_core::{
    FilePicker, HarmonizerError,
    file_selector::{WAV_EXTENSION, WAV_FILTER_NAME},
};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

/// Native open-file dialog with a `.wav` filter hint.
pub struct RfdPicker;

impl FilePicker for RfdPicker {
    fn pick_wav_file(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Select File")
            .add_filter(WAV_FILTER_NAME, &[WAV_EXTENSION])
            .pick_file()
    }
}

/// Modal error box for a rejected selection. Blocks until dismissed.
pub fn show_invalid_selection(error: &HarmonizerError) {
    tracing::debug!("Showing error dialog: {error}");
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description("Invalid file selected!")
        .set_buttons(MessageButtons::Ok)
        .show();
}
