//! Profile configuration shown on the settings screen.
//!
//! Stored at `~/.card-wallet/config.toml`; created with defaults on first
//! run. A missing or broken file never stops the app — `main` falls back to
//! the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display name on the profile row.
    #[serde(default = "default_name")]
    pub profile_name: String,

    /// Contact address shown under the name.
    #[serde(default = "default_email")]
    pub profile_email: String,
}

fn default_name() -> String {
    "Javier MGB".to_string()
}

fn default_email() -> String {
    "usuario@ejemplo.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_name: default_name(),
            profile_email: default_email(),
        }
    }
}

impl Config {
    /// Load configuration from disk, creating the default file if absent.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            log::info!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            log::info!("Creating default config");
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;
        log::info!("Config saved to {}", config_path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile_name.trim().is_empty() {
            return Err(ConfigError::InvalidProfile(
                "empty profile name".to_string(),
            ));
        }
        if !self.profile_email.contains('@') {
            return Err(ConfigError::InvalidProfile(format!(
                "not a mail address: {}",
                self.profile_email
            )));
        }
        Ok(())
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        let mut path = Self::data_dir()?;
        path.push("config.toml");
        Ok(path)
    }

    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".card-wallet"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Home directory not found")]
    NoHomeDir,

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.profile_name, "Javier MGB");
        assert_eq!(config.profile_email, "usuario@ejemplo.com");
    }

    #[test]
    fn test_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.profile_name = "  ".to_string();
        assert!(config.validate().is_err());

        config.profile_name = "Javier MGB".to_string();
        config.profile_email = "no-arroba".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.profile_name, deserialized.profile_name);
        assert_eq!(config.profile_email, deserialized.profile_email);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.profile_name, "Javier MGB");
        assert_eq!(config.profile_email, "usuario@ejemplo.com");
    }
}
