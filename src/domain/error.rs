//! Domain error types for the Ivresse persistence bootstrap.
//!
//! Constructing the storage handle is the only fallible operation in this
//! crate; these errors make that failure explicit instead of letting it
//! abort whichever caller happened to request the handle first.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing the persistent storage handle.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to prepare storage directory {}: {source}", .path.display())]
    PrepareDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialize database \"{name}\" at {}: {source}", .path.display())]
    Initialization {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}
