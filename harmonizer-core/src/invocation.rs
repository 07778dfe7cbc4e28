//! # Invocation Builder
//!
//! Turns the form into the command line for the external `import` program.
//!
//! `import` takes eleven positional arguments:
//! `[input .wav] [output .xml] [key] [new key] [bpm] [meter] [pickup]
//! [harmonic rhythm] [# parts] [composer] [title]`.
//!
//! The stock harmonize action ignores the form and always sends the same
//! eight arguments. That behavior is [`InvocationMode::Fixed`] and stays the
//! default; whether the form values were meant to be forwarded is an open
//! question, so forwarding them is opt-in through [`InvocationMode::FromForm`].
//!
//! `import` compares the input suffix against `.wav` byte for byte, so a
//! `.WAV` file the form accepts is refused here in `FromForm` mode instead of
//! launching a child that exits straight away.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::HarmonizerConfig;
use crate::error::{HarmonizerError, Result};
use crate::form::FormState;

/// Arguments sent in [`InvocationMode::Fixed`], after the program path.
pub const FIXED_ARGS: [&str; 8] = ["somewhere.wav", "output.xml", "0", "0", "120", "4", "0", "4"];

/// Tempo forwarded when the beats-per-minute field is left empty.
pub const DEFAULT_BPM: &str = "120";

/// Exact suffix `import` accepts for its input file.
const IMPORT_INPUT_SUFFIX: &[u8] = b".wav";

/// Pickup beats before the first full measure. The form has no control for it.
const PICKUP_BEATS: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationMode {
    /// Hard-coded argument list, form values are collected and discarded.
    #[default]
    Fixed,
    /// Arguments derived from the form.
    FromForm,
}

/// A program plus its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    /// Kept as OS strings so non-UTF-8 paths reach the child unchanged.
    pub args: Vec<OsString>,
    pub working_dir: Option<PathBuf>,
}

impl Invocation {
    /// Builds the invocation for `state` according to `config.invocation_mode`.
    pub fn build(config: &HarmonizerConfig, state: &FormState) -> Result<Self> {
        let args = match config.invocation_mode {
            InvocationMode::Fixed => FIXED_ARGS.into_iter().map(OsString::from).collect(),
            InvocationMode::FromForm => form_args(config, state)?,
        };
        Ok(Self {
            program: config.program.clone(),
            args,
            working_dir: config.working_dir.clone(),
        })
    }
}

impl fmt::Display for Invocation {
    /// Space-joined command line, as it would be typed in a shell.
    /// Arguments containing whitespace or quotes are double-quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_shell_word(f, OsStr::new(&self.program))?;
        for arg in &self.args {
            f.write_str(" ")?;
            write_shell_word(f, arg)?;
        }
        Ok(())
    }
}

fn write_shell_word(f: &mut fmt::Formatter<'_>, word: &OsStr) -> fmt::Result {
    let word = word.to_string_lossy();
    let needs_quotes = word.is_empty() || word.chars().any(|c| c.is_whitespace() || c == '"');
    if !needs_quotes {
        return f.write_str(&word);
    }
    write!(f, "\"{}\"", word.replace('"', "\\\""))
}

/// True when the file name ends in lower-case `.wav`, as `import` requires.
fn import_accepts(input: &Path) -> bool {
    input
        .file_name()
        .map(|name| name.as_encoded_bytes().ends_with(IMPORT_INPUT_SUFFIX))
        .unwrap_or(false)
}

fn form_args(config: &HarmonizerConfig, state: &FormState) -> Result<Vec<OsString>> {
    let input = state
        .selected_file_path
        .as_ref()
        .ok_or(HarmonizerError::MissingInputFile)?;
    if !import_accepts(input) {
        return Err(HarmonizerError::UnsupportedInputSuffix(input.clone()));
    }

    let bpm = match state.beats_per_minute.trim() {
        "" => DEFAULT_BPM.to_string(),
        text => text.to_string(),
    };
    let fifths = state.key.fifths().to_string();

    let mut args = vec![input.as_os_str().to_os_string()];
    args.extend(
        [
            config.output_file.clone(),
            fifths.clone(),
            // The melody is harmonized in the key it was sung in.
            fifths,
            bpm,
            state.time_signature.beats().to_string(),
            PICKUP_BEATS.to_string(),
            state.speed.harmonic_rhythm().to_string(),
            state.number_of_parts.count().to_string(),
            underscored(&config.composer),
            underscored(&config.title),
        ]
        .into_iter()
        .map(OsString::from),
    );
    Ok(args)
}

/// `import` reads names as single arguments and turns `_` back into spaces.
fn underscored(name: &str) -> String {
    name.trim().replace(' ', "_")
}
