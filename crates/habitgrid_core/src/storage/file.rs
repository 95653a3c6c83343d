//! File-backed storage slot.
//!
//! # Responsibility
//! - Persist the habit collection document as one file on disk.
//! - Create the parent directory on open.
//!
//! # Invariants
//! - A missing file reads as "no data yet", never as an error.

use super::{StorageBackend, StorageResult};
use log::{error, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Stores the whole collection document at a single file path.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Opens the slot at `path`, creating parent directories as needed.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        info!(
            "event=storage_open module=storage status=start path={}",
            path.display()
        );

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                error!(
                    "event=storage_open module=storage status=error path={} error={}",
                    path.display(),
                    err
                );
                return Err(err.into());
            }
        }

        info!(
            "event=storage_open module=storage status=ok path={}",
            path.display()
        );
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, payload: &str) -> StorageResult<()> {
        fs::write(&self.path, payload).map_err(Into::into)
    }
}
