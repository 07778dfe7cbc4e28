//! # Harmonizer - Melody Harmonization Front End
//!
//! This module contains the GUI application for the Harmonizer. A single
//! window collects an input `.wav` file plus a handful of musical settings,
//! and the Harmonize button hands the work to the external `import` program.
//!
//! ## Architecture
//! - **Main Thread**: Iced GUI application with dark theme; every interaction,
//!   including the modal file dialog, runs here
//! - **Core**: `harmonizer-core` owns form state, validation and the process launch
//! - **Child Process**: started detached, never awaited by the UI

mod picker;
mod ui;

use harmonizer_core::{
    FormController, FormState, HarmonizerConfig, HarmonizerError, LaunchOutcome,
    options::{Key, NumberOfFiles, NumberOfParts, Speed, TimeSignature},
};
use iced::{self, Element, Theme};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::main_display::create_main_view;

/// Main entry point for the Harmonizer application.
///
/// Installs logging, then runs the Iced application with the dark theme.
pub fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("Starting Harmonizer");
    iced::application("Harmonizer", HarmonizerApp::update, HarmonizerApp::view)
        .theme(HarmonizerApp::theme)
        .window_size((720.0, 520.0))
        .run()?;
    info!("Harmonizer closed");
    Ok(())
}

/// Installs a stdout subscriber filtered by `RUST_LOG`, defaulting to `info`.
fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

/// Application message types for the Iced GUI framework.
#[derive(Debug, Clone)]
pub enum Message {
    // Upload panel
    SelectFile,

    // Configure panel
    TimeSignatureSelected(TimeSignature),
    BeatsPerMinuteChanged(String),
    KeySelected(Key),

    // Output panel
    NumberOfFilesSelected(NumberOfFiles),
    NumberOfPartsSelected(NumberOfParts),
    SpeedSelected(Speed),
    Harmonize,
}

/// Main application state for the Harmonizer.
#[derive(Debug)]
struct HarmonizerApp {
    controller: FormController,
    form: FormState,
    /// One-line feedback shown under the Harmonize button.
    status: Option<String>,
}

impl Default for HarmonizerApp {
    /// Loads the launcher config and starts with a default form.
    ///
    /// A broken config file is logged and replaced by the defaults so the
    /// window still opens.
    fn default() -> Self {
        Self::from_config_path(&HarmonizerConfig::config_path())
    }
}

impl HarmonizerApp {
    fn from_config_path(path: &Path) -> Self {
        let config = HarmonizerConfig::load_or_default(path).unwrap_or_else(|e| {
            warn!("{e}; falling back to default config");
            HarmonizerConfig::default()
        });

        Self {
            controller: FormController::new(config),
            form: FormState::new(),
            status: None,
        }
    }

    /// Applies one user interaction to the form.
    fn update(&mut self, message: Message) {
        match message {
            Message::SelectFile => {
                match self.controller.choose_file(&picker::RfdPicker, &mut self.form) {
                    Ok(_) => {}
                    Err(e @ HarmonizerError::InvalidFileSelection(_)) => {
                        picker::show_invalid_selection(&e);
                    }
                    Err(e) => warn!("File selection failed: {e}"),
                }
            }
            Message::TimeSignatureSelected(time_signature) => {
                self.form.time_signature = time_signature;
            }
            Message::BeatsPerMinuteChanged(text) => {
                self.form.beats_per_minute = text;
            }
            Message::KeySelected(key) => {
                self.form.key = key;
            }
            Message::NumberOfFilesSelected(count) => {
                self.form.number_of_files = count;
            }
            Message::NumberOfPartsSelected(count) => {
                self.form.number_of_parts = count;
            }
            Message::SpeedSelected(speed) => {
                self.form.speed = speed;
            }
            Message::Harmonize => {
                self.status = Some(match self.controller.submit(&self.form) {
                    LaunchOutcome::Launched(invocation) => format!("Started: {invocation}"),
                    LaunchOutcome::Failed(e) => format!("Could not start: {e}"),
                });
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        create_main_view(&self.form, self.status.as_deref())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
