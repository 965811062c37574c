//! SQLite database setup and connection management for Ivresse
//! Handles opening the backing store and connection-level initialization.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::domain::StorageError;
use crate::infra::context::AppContext;

/// Fixed logical name of the application's backing store.
pub const DATABASE_NAME: &str = "ivresse-database";

/// Database wrapper that manages the shared SQLite connection.
#[derive(Debug)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (or create) the store inside the context's data home.
    pub fn open_in(context: &AppContext) -> Result<Self, StorageError> {
        Self::open_at(context.database_path())
    }

    /// Open (or create) the store at an explicit path.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::PrepareDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        log::info!("opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| StorageError::Initialization {
            name: DATABASE_NAME,
            path: path.clone(),
            source,
        })?;
        init_connection(&conn).map_err(|source| StorageError::Initialization {
            name: DATABASE_NAME,
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(path),
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(in_memory_error)?;
        init_connection(&conn).map_err(in_memory_error)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        })
    }

    /// Get a reference to the connection.
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }

    /// Path backing this store (`None` for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Connection-level initialization. No schema objects are created here;
/// the handle hands out the raw connection only.
fn init_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    // journal_mode returns the resulting mode; pragma_update discards it.
    conn.pragma_update(None, "journal_mode", "WAL")?;
    Ok(())
}

fn in_memory_error(source: rusqlite::Error) -> StorageError {
    StorageError::Initialization {
        name: DATABASE_NAME,
        path: PathBuf::from(":memory:"),
        source,
    }
}
