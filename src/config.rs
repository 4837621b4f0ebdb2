use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DB_DIR: &str = "db";
const DEFAULT_ACTIVE_FILE: &str = "products.csv";
const DEFAULT_DEFAULT_FILE: &str = "products_default.csv";

/// Where the store files live. The location is explicit configuration, not
/// ambient state: the CLI resolves it once and hands it to the store
/// constructor. Stored in `config.json` next to the db directory; every
/// field falls back to its default when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the store files, relative to the base directory.
    #[serde(default = "default_db_dir")]
    pub db_dir: PathBuf,

    /// Filename of the active (mutable) store.
    #[serde(default = "default_active_file")]
    pub active_file: String,

    /// Filename of the read-only baseline used by reset.
    #[serde(default = "default_default_file")]
    pub default_file: String,
}

fn default_db_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DB_DIR)
}

fn default_active_file() -> String {
    DEFAULT_ACTIVE_FILE.to_string()
}

fn default_default_file() -> String {
    DEFAULT_DEFAULT_FILE.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_dir: default_db_dir(),
            active_file: default_active_file(),
            default_file: default_default_file(),
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, base_dir: P) -> Result<()> {
        let config_path = base_dir.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// The db directory resolved against a base directory.
    pub fn db_dir_under<P: AsRef<Path>>(&self, base_dir: P) -> PathBuf {
        base_dir.as_ref().join(&self.db_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.db_dir, PathBuf::from("db"));
        assert_eq!(config.active_file, "products.csv");
        assert_eq!(config.default_file, "products_default.csv");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.active_file = "inventory.csv".to_string();
        config.save(dir.path()).unwrap();

        let loaded = AppConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.active_file, "inventory.csv");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"db_dir": "data"}"#,
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.db_dir, PathBuf::from("data"));
        assert_eq!(config.active_file, "products.csv");
    }
}
