//! Whole-file JSON array storage.
//!
//! A [`JsonFileStore`] owns a single file that holds one JSON array of records. Every read loads
//! the whole array and every write replaces the whole file:
//!
//! ```text
//! data/
//! ├── citas.json          # [ {...}, {...} ]
//! └── citas.json.tmp      # only exists for the duration of a write
//! ```
//!
//! ## Missing versus unreadable
//!
//! A file that does not exist, or that contains only whitespace, reads as an empty collection.
//! A file that exists but cannot be read or parsed is an error. The existence check is done
//! explicitly before the read so the two cases never collapse into one.
//!
//! ## Writes
//!
//! Writes go to a sibling temporary file which is then renamed over the target, so readers see
//! either the old array or the new one. Read-modify-write cycles made through
//! [`JsonFileStore::modify`] are serialised by a per-store mutex. Other processes writing the same
//! file are not coordinated.

use crate::constants::TEMP_FILE_SUFFIX;
use crate::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Mutex;

/// File-backed collection of `T` records stored as one JSON array.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a store for `path`. No I/O happens until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    /// Reads every record in file order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if:
    /// - the file exists but cannot be read ([`StoreError::FileRead`]),
    /// - the content is not a JSON array of `T` ([`StoreError::Deserialization`]).
    pub fn read_all(&self) -> StoreResult<Vec<T>> {
        if !self.path.exists() {
            tracing::debug!("records file {} not found, treating as empty", self.path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(StoreError::FileRead)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(StoreError::Deserialization)
    }

    /// Replaces the file content with `records`, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if:
    /// - parent directory creation fails,
    /// - serialisation fails,
    /// - the temporary file cannot be written or renamed over the target.
    pub fn write_all(&self, records: &[T]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::StorageDirCreation)?;
        }

        let json = serde_json::to_string_pretty(records).map_err(StoreError::Serialization)?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(StoreError::FileWrite)?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            // Best effort: the target is untouched, only the stray temp file is left behind.
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::FileWrite(e));
        }

        tracing::debug!(
            "wrote {} record(s) to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Runs a read-modify-write cycle while holding the store's write lock.
    ///
    /// `f` receives the current records and returns whether it changed them. The file is only
    /// rewritten when it did. The return value is whatever `f` returned.
    pub fn modify(&self, f: impl FnOnce(&mut Vec<T>) -> bool) -> StoreResult<bool> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;

        let mut records = self.read_all()?;
        let changed = f(&mut records);
        if changed {
            self.write_all(&records)?;
        }
        Ok(changed)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(TEMP_FILE_SUFFIX);
        self.path.with_file_name(name)
    }
}
