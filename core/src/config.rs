//! Settings file loading and saving
//!
//! Source settings are stored as TOML. A missing file is not an error: the
//! caller gets defaults so a first run works without any setup.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use match_counter_types::CounterSettings;

/// Errors that can occur during settings loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

/// Load settings from a TOML file, or defaults if it doesn't exist.
pub fn load_settings(path: &Path) -> Result<CounterSettings, ConfigError> {
    if !path.exists() {
        tracing::debug!("No settings at {:?}, using defaults", path);
        return Ok(CounterSettings::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_settings(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse settings from TOML text.
pub fn parse_settings(contents: &str) -> Result<CounterSettings, toml::de::Error> {
    toml::from_str(contents)
}

/// Save settings to a TOML file
pub fn save_settings(path: &Path, settings: &CounterSettings) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(settings).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("Saved settings to {:?}", path);
    Ok(())
}
