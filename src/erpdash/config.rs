use crate::error::Result;
use crate::table::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOGIN_DELAY_MS: u64 = 500;

/// Client configuration, stored in `<data-dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ErpConfig {
    /// Rows per page for list views
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Simulated round trip on login, in milliseconds
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_login_delay_ms() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

impl Default for ErpConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
        }
    }
}

impl ErpConfig {
    pub const KEYS: [&'static str; 2] = ["page-size", "login-delay-ms"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ErpConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "login-delay-ms" => Some(self.login_delay_ms.to_string()),
            _ => None,
        }
    }

    /// Page sizes are limited to the ones the page-size picker offers.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" => {
                let size: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("page-size must be a number, got {}", value))?;
                if !PAGE_SIZE_OPTIONS.contains(&size) {
                    return Err(format!("page-size must be one of {:?}", PAGE_SIZE_OPTIONS));
                }
                self.page_size = size;
            }
            "login-delay-ms" => {
                self.login_delay_ms = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("login-delay-ms must be a number, got {}", value))?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ErpConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.login_delay_ms, 500);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = ErpConfig::load(dir.path()).unwrap();
        assert_eq!(config, ErpConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = ErpConfig::default();
        config.set("page-size", "25").unwrap();
        config.set("login-delay-ms", "0").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ErpConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 25);
        assert_eq!(loaded.login_delay_ms, 0);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page-size": 50}"#).unwrap();

        let loaded = ErpConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 50);
        assert_eq!(loaded.login_delay_ms, 500);
    }

    #[test]
    fn test_rejects_unsupported_page_size() {
        let mut config = ErpConfig::default();
        assert!(config.set("page-size", "7").is_err());
        assert!(config.set("page-size", "ten").is_err());
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = ErpConfig::default();
        assert!(config.get("color").is_none());
        assert!(config.set("color", "blue").is_err());
    }
}
