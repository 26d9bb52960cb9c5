//! Error types for the archive.
//!
//! Read failures never reach the presentation layer: listing falls back to an
//! empty archive. These errors surface from writes, and from appends whose
//! preceding read failed for a reason other than a missing file.

/// Errors that can occur in archive storage.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// Reading or writing the backing file failed.
    #[error("archive I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored records could not be encoded or decoded.
    #[error("archive serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
