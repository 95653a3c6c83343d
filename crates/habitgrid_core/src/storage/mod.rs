//! Storage slot abstraction and backends.
//!
//! # Responsibility
//! - Define the raw read/write contract over the single persisted slot.
//! - Provide the file-backed production backend and an in-memory fake for
//!   tests.
//!
//! # Invariants
//! - The slot holds at most one JSON document; `read` returning `Ok(None)`
//!   means "no data yet", which is a valid state.
//! - Backends never interpret the payload.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level storage failure.
#[derive(Debug)]
pub enum StorageError {
    /// The underlying medium rejected the operation (missing permissions,
    /// exhausted quota, unavailable device).
    Unavailable(std::io::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(err) => write!(f, "storage unavailable: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Unavailable(value)
    }
}

/// Raw access to the single string-keyed storage slot.
///
/// Injected into the store so tests can substitute [`MemoryStorage`] for
/// the real file backend.
pub trait StorageBackend {
    /// Reads the whole slot. `Ok(None)` when nothing was ever written.
    fn read(&self) -> StorageResult<Option<String>>;

    /// Overwrites the whole slot.
    fn write(&self, payload: &str) -> StorageResult<()>;
}
