//! # Launcher Configuration
//!
//! Optional JSON settings describing how the external `import` program is
//! invoked. With no file on disk the defaults reproduce the stock behavior:
//! `./import` with the fixed argument list.

use std::ffi::OsString;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{HarmonizerError, Result};
use crate::invocation::InvocationMode;

/// File looked up in the working directory when no override is given.
pub const DEFAULT_CONFIG_FILE: &str = "harmonizer.json";
/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV_VAR: &str = "HARMONIZER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonizerConfig {
    /// Path of the harmonization program.
    pub program: String,
    /// Score file the program writes.
    pub output_file: String,
    /// Directory the child starts in. Inherited when absent.
    pub working_dir: Option<PathBuf>,
    pub invocation_mode: InvocationMode,
    pub composer: String,
    pub title: String,
}

impl Default for HarmonizerConfig {
    fn default() -> Self {
        Self {
            program: "./import".to_string(),
            output_file: "output.xml".to_string(),
            working_dir: None,
            invocation_mode: InvocationMode::Fixed,
            composer: "Unknown".to_string(),
            title: "Untitled".to_string(),
        }
    }
}

impl HarmonizerConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing keys fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let mut file = File::open(path).map_err(|source| HarmonizerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut data = String::new();
        file.read_to_string(&mut data)
            .map_err(|source| HarmonizerError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&data).map_err(|source| HarmonizerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        info!(path = %path.display(), mode = ?config.invocation_mode, "Loaded config");
        Ok(config)
    }

    /// Resolves the config location from `HARMONIZER_CONFIG` or the default name.
    pub fn config_path() -> PathBuf {
        Self::config_path_from(std::env::var_os(CONFIG_ENV_VAR))
    }

    /// Picks the config location given the raw value of `HARMONIZER_CONFIG`.
    /// An unset or empty value means the default file name.
    pub fn config_path_from(env_value: Option<OsString>) -> PathBuf {
        match env_value {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            Some(_) => {
                warn!("{CONFIG_ENV_VAR} is set but empty, ignoring it");
                PathBuf::from(DEFAULT_CONFIG_FILE)
            }
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HarmonizerConfig::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, HarmonizerConfig::default());
        assert_eq!(config.program, "./import");
        assert_eq!(config.invocation_mode, InvocationMode::Fixed);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "program": "/opt/harmonizer/import", "invocation_mode": "from_form" }}"#).unwrap();

        let config = HarmonizerConfig::load(file.path()).unwrap();
        assert_eq!(config.program, "/opt/harmonizer/import");
        assert_eq!(config.invocation_mode, InvocationMode::FromForm);
        assert_eq!(config.output_file, "output.xml");
        assert_eq!(config.working_dir, None);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "program = ./import").unwrap();

        let err = HarmonizerConfig::load_or_default(file.path()).unwrap_err();
        assert!(matches!(err, HarmonizerError::ConfigParse { .. }));
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = HarmonizerConfig::load_or_default(dir.path()).unwrap_err();
        assert!(matches!(err, HarmonizerError::ConfigRead { ref path, .. } if path == dir.path()));
    }

    #[test]
    fn env_value_overrides_default_name() {
        assert_eq!(
            HarmonizerConfig::config_path_from(Some(OsString::from("/etc/harmonizer/site.json"))),
            PathBuf::from("/etc/harmonizer/site.json")
        );
    }

    #[test]
    fn unset_or_empty_env_value_uses_default_name() {
        assert_eq!(HarmonizerConfig::config_path_from(None), PathBuf::from(DEFAULT_CONFIG_FILE));
        assert_eq!(
            HarmonizerConfig::config_path_from(Some(OsString::new())),
            PathBuf::from(DEFAULT_CONFIG_FILE)
        );
    }
}
