//! In-memory storage slot for tests.

use super::{StorageBackend, StorageError, StorageResult};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Shared in-memory slot substituting the file backend in tests.
///
/// Clones share one slot, so a test can keep a handle while the store owns
/// another. Write faults can be injected to exercise quota/unavailable
/// paths, and `write_count` exposes how many collection write cycles
/// happened.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Default)]
struct MemoryInner {
    slot: Option<String>,
    fail_writes: bool,
    write_count: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an already-populated slot, as if a previous session had
    /// persisted `payload`.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.inner.borrow_mut().slot = Some(payload.into());
        storage
    }

    /// Makes every subsequent write fail until disabled again.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.inner.borrow().write_count
    }

    /// Current raw slot contents.
    pub fn payload(&self) -> Option<String> {
        self.inner.borrow().slot.clone()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        Ok(self.inner.borrow().slot.clone())
    }

    fn write(&self, payload: &str) -> StorageResult<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StorageError::Unavailable(io::Error::new(
                io::ErrorKind::Other,
                "simulated quota exhaustion",
            )));
        }
        inner.slot = Some(payload.to_string());
        inner.write_count += 1;
        Ok(())
    }
}
