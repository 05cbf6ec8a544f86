//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit base directory (the `--data-dir` flag or the
//!    `EXPENSE_TRACKER_DATA_DIR` environment variable, both read by the CLI)
//! 2. `<home>/.expense-tracker`
//!
//! Library code never consults the environment itself; the resolved
//! `TrackerPaths` value is handed to whatever needs to touch disk.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::TrackerError;

/// Name of the per-user application directory under the home directory
const APP_DIR_NAME: &str = ".expense-tracker";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for all tracker data
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the base directory, preferring an explicit override
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory
    /// cannot be determined.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, TrackerError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => default_base_dir()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.expense-tracker/ or the override)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the expense store
    pub fn store_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn default_base_dir() -> Result<PathBuf, TrackerError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| TrackerError::Config("Could not determine home directory".into()))?;
    Ok(dirs.home_dir().join(APP_DIR_NAME))
}
