use crate::error::{Result, StockError};
use crate::views::DEFAULT_RECENT_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY_SYMBOL: &str = "Rp";

/// Configuration for stockpad, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// How many items the dashboard lists as recently added
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Symbol printed in front of money amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Install the sample dataset on a first run, before anything is stored
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_seed_sample_data() -> bool {
    true
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            currency_symbol: default_currency_symbol(),
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

/// Keys accepted by the `config` command.
pub const CONFIG_KEYS: [&str; 3] = ["recent-limit", "currency-symbol", "seed-sample-data"];

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    /// Current value of `key` as display text.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "recent-limit" => Ok(self.recent_limit.to_string()),
            "currency-symbol" => Ok(self.currency_symbol.clone()),
            "seed-sample-data" => Ok(self.seed_sample_data.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Parse `value` and store it under `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "recent-limit" => {
                self.recent_limit = value.trim().parse().map_err(|_| {
                    StockError::InvalidField(format!("recent-limit must be a number: {}", value))
                })?;
            }
            "currency-symbol" => self.currency_symbol = value.to_string(),
            "seed-sample-data" => {
                self.seed_sample_data = value.trim().parse().map_err(|_| {
                    StockError::InvalidField(format!(
                        "seed-sample-data must be true or false: {}",
                        value
                    ))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn unknown_key(key: &str) -> StockError {
    StockError::InvalidField(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockConfig::default();
        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.currency_symbol, "Rp");
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = StockConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, StockConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = StockConfig::default();
        config.set("recent-limit", "10").unwrap();
        config.set("currency-symbol", "$").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = StockConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.recent_limit, 10);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"currency_symbol":"€"}"#,
        )
        .unwrap();

        let loaded = StockConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.recent_limit, 5);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = StockConfig::default();
        assert!(config.set("recent-limit", "lots").is_err());
        assert!(config.set("seed-sample-data", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, StockConfig::default());
    }

    #[test]
    fn test_entries_cover_all_keys() {
        let entries = StockConfig::default().entries();
        let keys: Vec<_> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, CONFIG_KEYS);
    }
}
