//! User settings for the expense tracker
//!
//! Preferences live in `config.json` next to the store. Every field has a
//! default so older or hand-edited files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Output path used by `export` when none is given
    #[serde(default = "default_export_file")]
    pub default_export_file: String,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_export_file() -> String {
    "expenses.csv".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_export_file: default_export_file(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

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
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_export_file, "expenses.csv");
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_missing_file_yields_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            audit_enabled: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.default_export_file, "expenses.csv");
        assert!(loaded.audit_enabled);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }
}
