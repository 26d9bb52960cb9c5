//! The grave archive: append, list, reset.
//!
//! Every operation runs under the archive's own lock so that two concurrent
//! appends cannot interleave their load-modify-store cycles and drop a
//! record.

use std::sync::{Mutex, PoisonError};

use hatchling_types::Grave;

use crate::backend::ArchiveBackend;
use crate::error::ArchiveError;

/// Append-only record of every pet that has died.
#[derive(Debug)]
pub struct Archive<B> {
    backend: B,
    lock: Mutex<()>,
}

impl<B: ArchiveBackend> Archive<B> {
    /// Wrap a storage backend.
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            lock: Mutex::new(()),
        }
    }

    /// Add one grave, keeping every record already stored.
    ///
    /// If the backend fails to read its store, nothing is written. Stored
    /// data that cannot be decoded is the backend's to set aside; the append
    /// then starts from an empty set.
    pub fn append(&self, grave: Grave) -> Result<(), ArchiveError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut graves = self.backend.load()?;
        let generation = grave.generation;
        graves.push(grave);
        self.backend.store(&graves)?;
        tracing::debug!(generation, total = graves.len(), "Grave appended to archive");
        Ok(())
    }

    /// Every grave, ordered by ascending generation.
    ///
    /// Graves of the same generation keep their stored order. An unreadable
    /// archive lists as empty.
    pub fn list(&self) -> Vec<Grave> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut graves = match self.backend.load() {
            Ok(graves) => graves,
            Err(e) => {
                tracing::warn!(error = %e, "Archive unreadable, listing as empty");
                Vec::new()
            }
        };
        graves.sort_by_key(|grave| grave.generation);
        graves
    }

    /// Delete every grave. Irreversible.
    pub fn reset(&self) -> Result<(), ArchiveError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.backend.store(&[])?;
        tracing::info!("Archive reset");
        Ok(())
    }
}
