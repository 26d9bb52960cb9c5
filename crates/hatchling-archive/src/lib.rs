//! Append-only grave archive for the Hatchling virtual pet.
//!
//! Every pet that dies leaves a [`Grave`](hatchling_types::Grave). The
//! archive keeps all of them across restarts and generations, and only the
//! owner's explicit reset removes them.
//!
//! # Modules
//!
//! - [`archive`] -- The [`Archive`] wrapper: append, list, reset
//! - [`backend`] -- Storage backends ([`JsonFileBackend`], [`MemoryBackend`])
//! - [`error`] -- Storage errors ([`ArchiveError`])

pub mod archive;
pub mod backend;
pub mod error;

pub use archive::Archive;
pub use backend::{ArchiveBackend, JsonFileBackend, MemoryBackend};
pub use error::ArchiveError;
