//! User settings for layak-cli
//!
//! Persists the default simulator profile (city and role) so repeat runs do
//! not need the flags every time.

use serde::{Deserialize, Serialize};

use super::paths::LayakPaths;
use crate::error::LayakError;
use crate::reference::{City, Role};

/// User settings for layak-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default city for the simulator
    #[serde(default = "default_city")]
    pub default_city: City,

    /// Default role for the simulator
    #[serde(default = "default_role")]
    pub default_role: Role,
}

fn default_schema_version() -> u32 {
    1
}

fn default_city() -> City {
    City::Jakarta
}

fn default_role() -> Role {
    Role::Worker
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_city: default_city(),
            default_role: default_role(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LayakPaths) -> Result<Self, LayakError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LayakError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| LayakError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LayakPaths) -> Result<(), LayakError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LayakError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| LayakError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_city, City::Jakarta);
        assert_eq!(settings.default_role, Role::Worker);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LayakPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_city = City::Yogyakarta;
        settings.default_role = Role::Student;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_city, City::Yogyakarta);
        assert_eq!(loaded.default_role, Role::Student);
    }

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LayakPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.default_city, City::Jakarta);
    }
}
