//! The in-memory snapshot of everything the user has selected on the form.

use std::path::PathBuf;

use tracing::debug;

use crate::options::{Key, NumberOfFiles, NumberOfParts, Speed, TimeSignature};

/// Placeholder shown in the empty beats-per-minute field.
pub const BPM_PLACEHOLDER: &str = "20 to 200";

/// Snapshot of every selection currently made on the form.
///
/// Created with defaults at startup, mutated by user interaction, read once
/// per submit. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Only ever set through [`crate::choose_file`], so it always ends in `.wav`.
    pub selected_file_path: Option<PathBuf>,
    pub time_signature: TimeSignature,
    /// Opaque free text; no parsing or range check.
    pub beats_per_minute: String,
    pub key: Key,
    pub number_of_files: NumberOfFiles,
    pub number_of_parts: NumberOfParts,
    pub speed: Speed,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes every collected value to the log, one field per event field.
    pub fn log_values(&self) {
        debug!(
            file = ?self.selected_file_path,
            time_signature = %self.time_signature,
            beats_per_minute = %self.beats_per_minute,
            key = %self.key,
            number_of_files = %self.number_of_files,
            number_of_parts = %self.number_of_parts,
            speed = %self.speed,
            "Collected form values"
        );
    }
}
