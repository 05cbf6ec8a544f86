//! Storage layer for the expense tracker
//!
//! A single JSON store file written atomically, plus the audit trail of the
//! changes made to it.

pub mod file_io;
pub mod store;

pub use file_io::{read_json, write_json_atomic};
pub use store::Store;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::TrackerResult;

/// Owns the loaded store for the duration of one command
pub struct Storage {
    paths: TrackerPaths,
    pub store: Store,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Load the store from the resolved paths
    ///
    /// A missing store file is not an error; a fresh empty store is used.
    pub fn open(paths: TrackerPaths, settings: &Settings) -> TrackerResult<Self> {
        let store = Store::load(paths.store_file())?;
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            paths,
            store,
            audit,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Persist the whole store
    pub fn save(&self) -> TrackerResult<()> {
        self.store.save(self.paths.store_file())
    }

    /// Append an entry to the audit log, if auditing is enabled
    ///
    /// Called after the store has been saved, so a failure here can no
    /// longer undo the change; it is reported on stderr instead.
    pub fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                eprintln!("Warning: failed to write audit log: {}", e);
            }
        }
    }
}
