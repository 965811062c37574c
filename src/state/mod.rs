use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::StorageError;
use crate::infra::app_config::{self, AppConfig};
use crate::infra::context::AppContext;
use crate::infra::db::{Database, DatabaseProvider};

/// Application-wide registry built once at process startup.
///
/// Owns the storage provider: every component resolves the shared handle
/// through [`database`](Self::database), so exactly one store is opened
/// per process and all callers observe the same instance.
pub struct AppState {
    context: AppContext,
    pub config: Arc<RwLock<AppConfig>>,
    database: DatabaseProvider,
}

impl AppState {
    /// Assemble the registry from the environment. Performs no storage
    /// I/O; the handle is constructed on first request.
    pub fn new() -> Self {
        let context = AppContext::resolve();
        let config = app_config::load_config(&context);
        Self::with_config(context, config)
    }

    /// Assemble the registry from already-resolved parts.
    pub fn with_config(context: AppContext, config: AppConfig) -> Self {
        let database = DatabaseProvider::new(context.clone());
        Self {
            context,
            config: Arc::new(RwLock::new(config)),
            database,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// The shared storage handle, constructed lazily on first request.
    pub fn database(&self) -> Result<Arc<Database>, StorageError> {
        self.database.provide()
    }

    /// Whether the storage handle has been constructed yet.
    pub fn storage_initialized(&self) -> bool {
        self.database.initialized()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
