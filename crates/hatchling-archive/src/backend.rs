//! Storage backends for the grave archive.
//!
//! A backend stores the whole record set at once: `load` returns every
//! grave, `store` replaces every grave. There are no partial writes.
//!
//! - [`JsonFileBackend`] -- a pretty-printed JSON array on disk. A file that
//!   no longer decodes is renamed aside, never overwritten.
//! - [`MemoryBackend`] -- an in-process vector, for tests and for
//!   deployments that do not need graves to outlive the process.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use hatchling_types::Grave;
use uuid::Uuid;

use crate::error::ArchiveError;

/// Whole-set storage for graves.
pub trait ArchiveBackend: Send + Sync {
    /// Read every stored grave. A store that does not exist yet, or whose
    /// contents cannot be decoded, is empty.
    fn load(&self) -> Result<Vec<Grave>, ArchiveError>;

    /// Replace the stored set with `graves`.
    fn store(&self, graves: &[Grave]) -> Result<(), ArchiveError>;
}

// ---------------------------------------------------------------------------
// JSON file
// ---------------------------------------------------------------------------

/// Graves kept as a JSON array in one file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// target, so readers see either the old set or the new set.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend for the file at `path`. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling(".tmp")
    }

    /// Move an undecodable archive file out of the way, keeping its bytes.
    fn set_aside(&self, cause: &serde_json::Error) -> Result<(), ArchiveError> {
        let aside = self.sibling(&format!(".corrupt-{}", Uuid::now_v7()));
        std::fs::rename(&self.path, &aside)?;
        tracing::warn!(
            error = %cause,
            path = %self.path.display(),
            moved_to = %aside.display(),
            "Archive file could not be decoded, moved aside"
        );
        Ok(())
    }
}

impl ArchiveBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<Grave>, ArchiveError> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        match serde_json::from_slice(&data) {
            Ok(graves) => Ok(graves),
            Err(e) => {
                self.set_aside(&e)?;
                Ok(Vec::new())
            }
        }
    }

    fn store(&self, graves: &[Grave]) -> Result<(), ArchiveError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(graves)?;
        let temp = self.temp_path();
        std::fs::write(&temp, data)?;
        std::fs::rename(&temp, &self.path)?;
        tracing::debug!(path = %self.path.display(), count = graves.len(), "Wrote archive file");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

/// Graves kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    graves: Mutex<Vec<Grave>>,
}

impl MemoryBackend {
    /// An empty in-memory archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// An in-memory archive pre-filled with `graves`.
    pub const fn with_graves(graves: Vec<Grave>) -> Self {
        Self {
            graves: Mutex::new(graves),
        }
    }
}

impl ArchiveBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<Grave>, ArchiveError> {
        let graves = self.graves.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(graves.clone())
    }

    fn store(&self, graves: &[Grave]) -> Result<(), ArchiveError> {
        let mut stored = self.graves.lock().unwrap_or_else(PoisonError::into_inner);
        stored.clear();
        stored.extend_from_slice(graves);
        Ok(())
    }
}
