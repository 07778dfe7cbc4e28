//! Error type shared by every core operation.

use std::path::PathBuf;

/// Errors surfaced by the form controller and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum HarmonizerError {
    /// The picked file does not carry a `.wav` extension.
    #[error("Invalid file selected! ({})", .0.display())]
    InvalidFileSelection(PathBuf),
    /// A parameterized invocation was requested before any file was chosen.
    #[error("No input .wav file has been selected")]
    MissingInputFile,
    /// The selection ends in `.wav` but not in the exact lower-case form
    /// `import` checks for.
    #[error("import only accepts a lower-case .wav suffix: {}", .0.display())]
    UnsupportedInputSuffix(PathBuf),
    /// The external program could not be started.
    #[error("Failed to launch {program}: {source}")]
    ProcessLaunch {
        program: String,
        source: std::io::Error,
    },
    /// The configuration file exists but could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for [`crate::HarmonizerConfig`].
    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, HarmonizerError>;
