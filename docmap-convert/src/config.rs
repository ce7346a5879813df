//! Converter configuration, read from a TOML file such as:
//!
//! ```toml
//! encode_mode = "strict"
//! reject_foreign_records = true
//! ```

use crate::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Whether registry encoding validates `Required` fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodeMode {
    #[default]
    /// Null required fields are silently omitted.
    Permissive,
    /// Null required fields fail with `MissingRequiredProperty`.
    Strict,
}

/// Settings applied by the [`ConverterRegistry`](crate::ConverterRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default)]
    pub encode_mode: EncodeMode,
    /// Reject records whose schema type differs from the converter's on decode.
    #[serde(default = "default_reject_foreign_records")]
    pub reject_foreign_records: bool,
}

fn default_reject_foreign_records() -> bool {
    true
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            encode_mode: EncodeMode::Permissive,
            reject_foreign_records: default_reject_foreign_records(),
        }
    }
}

impl ConverterConfig {
    /// Shorthand for the default config with strict encoding.
    pub fn strict() -> Self {
        Self {
            encode_mode: EncodeMode::Strict,
            ..Self::default()
        }
    }

    /// Parses a TOML document.
    pub fn from_toml_str(contents: &str) -> ConvertResult<Self> {
        toml::from_str(contents).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Loads configuration from `path`.
    /// Falls back to the defaults with a warning when the file is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No converter config found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded converter config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse converter config {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read converter config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn to_toml_string(&self) -> ConvertResult<String> {
        toml::to_string(self).map_err(|e| ConvertError::Config(e.to_string()))
    }
}
