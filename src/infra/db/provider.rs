//! Lazy singleton construction of the storage handle.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::domain::StorageError;
use crate::infra::context::AppContext;
use crate::infra::db::Database;

/// Provider that owns the once-only construction of the application's
/// storage handle.
///
/// The first call to [`provide`](Self::provide) opens the backing store;
/// concurrent first calls block until that construction finishes and then
/// observe the same fully constructed handle. A failed construction is
/// handed back to the caller and is not memoized, so the next request
/// retries.
pub struct DatabaseProvider {
    context: AppContext,
    handle: OnceCell<Arc<Database>>,
}

impl DatabaseProvider {
    /// Create a provider for the given context. No storage I/O happens
    /// until the first [`provide`](Self::provide) call.
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            handle: OnceCell::new(),
        }
    }

    /// Return the shared storage handle, constructing it on first use.
    pub fn provide(&self) -> Result<Arc<Database>, StorageError> {
        self.handle
            .get_or_try_init(|| Database::open_in(&self.context).map(Arc::new))
            .cloned()
    }

    /// Whether the handle has been constructed, without constructing it.
    pub fn initialized(&self) -> bool {
        self.handle.get().is_some()
    }

    /// The context this provider resolves storage paths from.
    pub fn context(&self) -> &AppContext {
        &self.context
    }
}
