use std::path::{Path, PathBuf};

use ivresse::infra::context::AppContext;
use ivresse::infra::db::DATABASE_NAME;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run()
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Resolve the data home the same way the application does
    let context = AppContext::resolve();
    let db_path = context.database_path();

    if !db_path.exists() {
        println!("Database does not exist at: {}", db_path.display());
        println!("No reset needed.");
        return Ok(());
    }

    // The WAL sidecars belong to the store and go with it
    let candidates = [
        db_path.clone(),
        sidecar(&db_path, "-wal"),
        sidecar(&db_path, "-shm"),
    ];
    for path in &candidates {
        if path.exists() {
            std::fs::remove_file(path)?;
            println!("Removed {}", path.display());
        }
    }

    println!(
        "Database reset. A fresh {} will be created on next start.",
        DATABASE_NAME
    );

    Ok(())
}

fn sidecar(db_path: &Path, suffix: &str) -> PathBuf {
    let mut name = db_path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    db_path.with_file_name(name)
}
