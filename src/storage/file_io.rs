//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrackerError;

/// Read JSON from a file, returning a default value if the file doesn't exist
///
/// Any other failure to open or parse the file is a corrupt store: it is
/// never silently replaced with an empty value.
pub fn read_json<T, P>(path: P) -> Result<T, TrackerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let corrupt = |reason: String| TrackerError::CorruptStore {
        path: path.display().to_string(),
        reason,
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(corrupt(format!("failed to open: {}", e))),
    };

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| corrupt(e.to_string()))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all, so a
/// crash mid-write leaves the previously committed contents in place.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Persistence(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let result = write_temp(&temp_path, data);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Persistence(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn write_temp<T: Serialize>(temp_path: &Path, data: &T) -> Result<(), TrackerError> {
    let file = File::create(temp_path)
        .map_err(|e| TrackerError::Persistence(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| TrackerError::Persistence(format!("Failed to serialize data: {}", e)))?;
    writeln!(writer)
        .map_err(|e| TrackerError::Persistence(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TrackerError::Persistence(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Persistence(format!("Failed to sync data: {}", e)))?;

    Ok(())
}
