use serde::{Deserialize, Serialize};

use crate::infra::context::AppContext;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Log filter applied at startup when `RUST_LOG` is not set.
    pub log_filter: Option<String>,
}

/// Read the configuration from the data home. Missing or unreadable
/// configuration behaves as default.
pub fn load_config(context: &AppContext) -> AppConfig {
    let path = context.config_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring malformed config at {}: {}", path.display(), err);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&AppContext::at(tmp.path()));
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_config_read_from_file() {
        let tmp = TempDir::new().unwrap();
        let context = AppContext::at(tmp.path());
        std::fs::write(context.config_path(), "log_filter = \"debug\"\n").unwrap();
        let config = load_config(&context);
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_malformed_config_defaults() {
        let tmp = TempDir::new().unwrap();
        let context = AppContext::at(tmp.path());
        std::fs::write(context.config_path(), "log_filter = [not toml").unwrap();
        let config = load_config(&context);
        assert!(config.log_filter.is_none());
    }
}
