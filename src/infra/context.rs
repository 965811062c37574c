//! Application context: locates the private storage area.
//!
//! The context is the only input the storage provider needs. It resolves
//! where the application keeps its on-device state and derives the fixed
//! paths inside that directory. Resolution itself performs no I/O.

use std::path::{Path, PathBuf};

use crate::infra::db::DATABASE_NAME;

/// Environment variable that relocates the application data home.
pub const DATA_HOME_ENV: &str = "IVRESSE_DATA_HOME";

const CONFIG_FILENAME: &str = "config.toml";

/// Application-scoped context. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppContext {
    data_home: PathBuf,
}

impl AppContext {
    /// Resolve the context from the environment and platform conventions.
    pub fn resolve() -> Self {
        Self {
            data_home: default_data_home(),
        }
    }

    /// Context rooted at an explicit directory (CLI override, tools, tests).
    pub fn at(data_home: impl Into<PathBuf>) -> Self {
        Self {
            data_home: data_home.into(),
        }
    }

    /// The application's private storage directory.
    pub fn data_home(&self) -> &Path {
        &self.data_home
    }

    /// Path of the backing database file inside the data home.
    pub fn database_path(&self) -> PathBuf {
        self.data_home.join(DATABASE_NAME)
    }

    /// Path of the optional configuration file inside the data home.
    pub fn config_path(&self) -> PathBuf {
        self.data_home.join(CONFIG_FILENAME)
    }
}

/// Get the default data home for the current platform.
fn default_data_home() -> PathBuf {
    if let Ok(path) = std::env::var(DATA_HOME_ENV) {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("Ivresse");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("Ivresse");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("ivresse");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("ivresse");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".ivresse")
}
