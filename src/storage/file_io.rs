//! CSV file I/O for flat record files
//!
//! Records are written without a header row. Free-text fields that contain
//! the delimiter, quotes or newlines are quoted by the CSV writer, so a comma
//! inside a name never shifts the fields that follow it.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LilipatError;

/// Records read from a file plus the number of lines that could not be parsed
#[derive(Debug)]
pub struct LoadedRecords<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for LoadedRecords<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

/// Read every record from a CSV file, returning nothing if the file doesn't exist
///
/// Records that fail to deserialize are skipped, counted and logged.
pub fn read_csv<T, P>(path: P) -> Result<LoadedRecords<T>, LilipatError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(LoadedRecords::default());
    }

    let file = File::open(path)
        .map_err(|e| LilipatError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut loaded = LoadedRecords::default();
    for (index, result) in reader.deserialize::<T>().enumerate() {
        match result {
            Ok(record) => loaded.records.push(record),
            Err(e) if e.is_io_error() => {
                return Err(LilipatError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
            Err(e) => {
                tracing::warn!(record = index + 1, "skipping malformed record in {}: {}", path.display(), e);
                loaded.skipped += 1;
            }
        }
    }

    Ok(loaded)
}

/// Append a single record to the end of a CSV file, creating it if needed
pub fn append_csv<T, P>(path: P, record: &T) -> Result<(), LilipatError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LilipatError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .serialize(record)
        .map_err(|e| LilipatError::Storage(format!("Failed to write record: {}", e)))?;
    writer
        .flush()
        .map_err(|e| LilipatError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Replace a CSV file's contents atomically (write to temp, then rename)
pub fn write_csv_atomic<T, P>(path: P, records: &[T]) -> Result<(), LilipatError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    // Same directory, so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LilipatError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| LilipatError::Storage(format!("Failed to serialize record: {}", e)))?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| LilipatError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| LilipatError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LilipatError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), LilipatError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LilipatError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}
