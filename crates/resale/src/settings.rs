//! Runtime settings.
//!
//! Settings come from a JSON file; every field is optional and falls back to
//! its default. The binary lets command line flags override the file.

use resale_encoding::DEFAULT_REFERENCE_YEAR;
use resale_output::DEFAULT_CURRENCY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default model artifact location.
pub const DEFAULT_MODEL_PATH: &str = "artifacts/resale_model.json";

/// Default feature schema location.
pub const DEFAULT_FEATURES_PATH: &str = "artifacts/model_features.json";

/// Errors that can occur while reading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("Failed to read settings {path}: {source}")]
    Read {
        /// Settings file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON
    #[error("Malformed settings {path}: {source}")]
    Format {
        /// Settings file path
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Where the artifacts live and how estimates are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Model artifact path
    pub model_path: PathBuf,
    /// Feature schema artifact path
    pub features_path: PathBuf,
    /// Year flat age is measured against
    pub reference_year: i32,
    /// Currency code shown with estimates
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            features_path: PathBuf::from(DEFAULT_FEATURES_PATH),
            reference_year: DEFAULT_REFERENCE_YEAR,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Settings {
    /// `<config dir>/resale/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("resale").join("config.json"))
    }

    /// Read settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&json).map_err(|source| SettingsError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Read settings from `path` if given, else from [`Settings::default_path`]
    /// when that file exists, else use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or parsed. An
    /// explicitly given path must exist.
    pub fn discover(path: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                log::debug!("No settings file found; using defaults");
                Ok(Self::default())
            }
        }
    }
}
