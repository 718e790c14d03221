use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::store::ClientSettings;

const LOCAL_CONFIG_PATH: &str = "direct-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/direct-dns/config.toml";

/// Main configuration structure for the Direct DNS responder
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Record store backend (ANAME, MX, SOA)
    #[serde(default)]
    pub record_store: Option<ClientSettings>,

    /// Certificate store backend (CERT)
    #[serde(default)]
    pub certificate_store: Option<ClientSettings>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. direct-dns.toml in current directory
    /// 3. /etc/direct-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(url) = overrides.record_store_url {
            match self.record_store.as_mut() {
                Some(settings) => settings.url = url,
                None => self.record_store = Some(ClientSettings::new(url)),
            }
        }
        if let Some(url) = overrides.certificate_store_url {
            match self.certificate_store.as_mut() {
                Some(settings) => settings.url = url,
                None => self.certificate_store = Some(ClientSettings::new(url)),
            }
        }
    }

    /// Validate configuration
    ///
    /// Missing backends are not a validation error here; the responder
    /// rejects them when it is constructed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let backends = [
            ("record_store", &self.record_store),
            ("certificate_store", &self.certificate_store),
        ];

        for (section, settings) in backends {
            if let Some(settings) = settings {
                settings
                    .validate()
                    .map_err(|e| ConfigError::Validation(format!("[{}] {}", section, e)))?;
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub record_store_url: Option<String>,
    pub certificate_store_url: Option<String>,
}
