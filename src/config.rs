use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".chefdeck").join("config.toml"))
    }

    /// Directory holding the menu blob and session history
    ///
    /// The configured override wins; otherwise `~/.chefdeck`.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage.data_dir {
            return Ok(dir.clone());
        }

        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".chefdeck"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_data_dir_override() {
        let config = Config {
            storage: StorageConfig {
                data_dir: Some(PathBuf::from("/tmp/menus")),
            },
        };

        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/menus"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            storage: StorageConfig {
                data_dir: Some(PathBuf::from("/tmp/menus")),
            },
        };

        let toml_string = toml::to_string(&config).unwrap();
        assert!(toml_string.contains("/tmp/menus"));

        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(
            deserialized.storage.data_dir,
            Some(PathBuf::from("/tmp/menus"))
        );
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.storage.data_dir.is_none());
    }
}
