//! Main entry point for the Ivresse application.
//! Boots the process-wide registry and the persistent store behind it.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use ivresse::infra::app_config::{self, AppConfig};
use ivresse::infra::context::AppContext;
use ivresse::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "ivresse")]
#[command(about = "Ivresse local persistence bootstrap", long_about = None)]
#[command(version)]
struct Args {
    /// Use DIR as the application data home instead of the platform default
    #[arg(long, value_name = "DIR")]
    data_home: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report the resolved storage paths without opening the store
    Status,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let context = match args.data_home {
        Some(dir) => AppContext::at(dir),
        None => AppContext::resolve(),
    };
    let config = app_config::load_config(&context);
    init_logging(&config);
    log::debug!("using data home {}", context.data_home().display());

    let state = AppState::with_config(context, config);
    match args.command {
        Some(Commands::Status) => status(&state),
        None => boot(&state),
    }
}

/// Initialize env_logger; `RUST_LOG` wins over the configured filter.
fn init_logging(config: &AppConfig) {
    let default_filter = config.log_filter.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Force the first handle request and verify the store answers.
fn boot(state: &AppState) -> Result<()> {
    let db = state.database()?;

    let conn = db.connection();
    let probe: i32 = conn
        .lock()
        .unwrap()
        .query_row("SELECT 1", [], |row| row.get(0))?;
    anyhow::ensure!(probe == 1, "storage probe returned {probe}");

    println!(
        "storage ready at {}",
        state.context().database_path().display()
    );
    Ok(())
}

/// Report paths and store presence. Never constructs the handle.
fn status(state: &AppState) -> Result<()> {
    let context = state.context();
    println!("data home: {}", context.data_home().display());
    println!("config:    {}", describe(&context.config_path()));
    println!("database:  {}", describe(&context.database_path()));

    let config = state.config.read();
    if let Some(filter) = config.log_filter.as_deref() {
        println!("log filter: {filter}");
    }
    Ok(())
}

fn describe(path: &Path) -> String {
    match std::fs::metadata(path) {
        Ok(meta) => format!("{} ({} bytes)", path.display(), meta.len()),
        Err(_) => format!("{} (absent)", path.display()),
    }
}
