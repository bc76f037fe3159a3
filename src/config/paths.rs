//! Path management for layak-cli
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `LAYAK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/layak-cli` or `~/.config/layak-cli`
//! 3. Windows: `%APPDATA%\layak-cli`

use std::path::PathBuf;

use crate::error::LayakError;

/// Manages all paths used by layak-cli
#[derive(Debug, Clone)]
pub struct LayakPaths {
    /// Base directory for all layak-cli data
    base_dir: PathBuf,
}

impl LayakPaths {
    /// Create a new LayakPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LayakError> {
        let base_dir = if let Ok(custom) = std::env::var("LAYAK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LayakPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/layak-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/layak-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to ledgers.json (all monthly ledgers)
    pub fn ledgers_file(&self) -> PathBuf {
        self.data_dir().join("ledgers.json")
    }

    /// Get the path to choices.json (saved future choices per month)
    pub fn choices_file(&self) -> PathBuf {
        self.data_dir().join("choices.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), LayakError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LayakError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LayakError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if layak-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LayakError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| LayakError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("layak-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LayakError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LayakError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("layak-cli"))
}
