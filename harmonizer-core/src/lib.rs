// harmonizer-core/src/lib.rs

//! The core logic for the Harmonizer front end.
//! This crate owns the form state, the enumerated options offered to the
//! user, `.wav` selection rules and the invocation of the external `import`
//! harmonization program. It is completely headless
//! and contains no GUI code.

pub mod config;
pub mod controller;
pub mod error;
pub mod file_selector;
pub mod form;
pub mod invocation;
pub mod launcher;
pub mod options;

pub use config::HarmonizerConfig;
pub use controller::{FormController, LaunchOutcome};
pub use error::HarmonizerError;
pub use file_selector::{FilePicker, choose_file, is_wav_file};
pub use form::FormState;
pub use invocation::{Invocation, InvocationMode};
pub use launcher::{ProcessLauncher, SystemLauncher};
