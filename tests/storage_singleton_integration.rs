//! Integration tests for the storage bootstrap
//! These tests verify the singleton-construction contract end to end.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, Barrier};
use std::thread;

use ivresse::domain::StorageError;
use ivresse::infra::app_config::AppConfig;
use ivresse::infra::context::AppContext;
use ivresse::infra::db::{DATABASE_NAME, DatabaseProvider};
use ivresse::state::AppState;
use tempfile::TempDir;

fn dir_entries(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_fresh_process_scenario() {
    // Fresh directory, no prior handle.
    let tmp = TempDir::new().unwrap();
    let state = AppState::with_config(AppContext::at(tmp.path()), AppConfig::default());

    // Nothing is created before the first request.
    assert!(dir_entries(tmp.path()).is_empty());
    assert!(!state.storage_initialized());

    // The first request constructs the store.
    let h1 = state.database().unwrap();
    assert!(state.context().database_path().exists());
    let after_first = dir_entries(tmp.path());
    assert!(after_first.contains(DATABASE_NAME));

    // The second request observes the same handle and leaves disk alone.
    let h2 = state.database().unwrap();
    assert!(Arc::ptr_eq(&h1, &h2));
    assert_eq!(dir_entries(tmp.path()), after_first);
}

#[test]
fn test_backing_store_uses_fixed_name() {
    let tmp = TempDir::new().unwrap();
    let provider = DatabaseProvider::new(AppContext::at(tmp.path()));
    let db = provider.provide().unwrap();

    let path = db.path().expect("file-backed store");
    assert_eq!(path.file_name().unwrap().to_str(), Some(DATABASE_NAME));
    assert_eq!(path, provider.context().database_path().as_path());
}

#[test]
fn test_concurrent_first_requests_share_one_handle() {
    let tmp = TempDir::new().unwrap();
    let provider = Arc::new(DatabaseProvider::new(AppContext::at(tmp.path())));

    const REQUESTERS: usize = 8;
    let barrier = Arc::new(Barrier::new(REQUESTERS));

    let workers: Vec<_> = (0..REQUESTERS)
        .map(|_| {
            let provider = provider.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                provider.provide().unwrap()
            })
        })
        .collect();

    let handles: Vec<_> = workers.into_iter().map(|w| w.join().unwrap()).collect();

    let first = &handles[0];
    for handle in &handles {
        assert!(Arc::ptr_eq(first, handle));
    }

    // Exactly one backing store was created; the only other entries the
    // data home may hold are its WAL sidecars.
    let entries = dir_entries(tmp.path());
    assert!(entries.contains(DATABASE_NAME));
    for name in &entries {
        assert!(
            name.starts_with(DATABASE_NAME),
            "unexpected entry in data home: {name}"
        );
    }
}

#[test]
fn test_construction_failure_is_surfaced_and_retried() {
    let tmp = TempDir::new().unwrap();
    let context = AppContext::at(tmp.path());
    // A directory squatting on the database path makes construction fail.
    std::fs::create_dir_all(context.database_path()).unwrap();

    let state = AppState::with_config(context.clone(), AppConfig::default());
    let err = state.database().unwrap_err();
    assert!(matches!(err, StorageError::Initialization { .. }));
    assert!(!state.storage_initialized());

    // Clear the obstruction; the next request succeeds.
    std::fs::remove_dir(context.database_path()).unwrap();
    let db = state.database().unwrap();
    assert_eq!(db.path(), Some(context.database_path().as_path()));
}
