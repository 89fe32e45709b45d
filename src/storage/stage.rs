//! Key/value store implementations for staged wizard data
//!
//! `JsonStageStore` keeps every staged entry in a single JSON object on
//! disk and rewrites it atomically on each `set`, so a crash mid-write
//! never corrupts previously staged data.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{TrippickerError, TrippickerResult};

/// The storage interface the wizard writes through
///
/// Writes are single-writer and last-write-wins: resubmitting the form
/// simply overwrites the prior snapshot under the same key.
pub trait StageStore {
    /// Read the value staged under `key`, if any
    fn get(&self, key: &str) -> TrippickerResult<Option<Value>>;

    /// Stage `value` under `key`, replacing any prior value
    fn set(&mut self, key: &str, value: Value) -> TrippickerResult<()>;
}

/// File-backed store: one JSON object mapping stage keys to values
#[derive(Debug)]
pub struct JsonStageStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl JsonStageStore {
    /// Open the store at `path`, loading any existing entries.
    ///
    /// A missing file is an empty store, not an error.
    pub fn open(path: impl AsRef<Path>) -> TrippickerResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let file = File::open(&path).map_err(|e| {
                TrippickerError::Storage(format!("Failed to open {}: {}", path.display(), e))
            })?;
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                TrippickerError::Storage(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    /// The file this store persists to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole entry map atomically (write to temp, then rename)
    fn save(&self) -> TrippickerResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TrippickerError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Temp file in the same directory, required for an atomic rename
        let temp_path = self.path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| TrippickerError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.entries)
            .map_err(|e| TrippickerError::Storage(format!("Failed to serialize data: {}", e)))?;

        writer
            .flush()
            .map_err(|e| TrippickerError::Storage(format!("Failed to flush data: {}", e)))?;

        writer
            .get_ref()
            .sync_all()
            .map_err(|e| TrippickerError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            TrippickerError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

impl StageStore for JsonStageStore {
    fn get(&self, key: &str) -> TrippickerResult<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> TrippickerResult<()> {
        self.entries.insert(key.to_string(), value);
        self.save()
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemoryStageStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of staged entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StageStore for MemoryStageStore {
    fn get(&self, key: &str) -> TrippickerResult<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> TrippickerResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
