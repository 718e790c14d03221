use super::root::Config;
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How to reach one backend service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClientSettings {
    /// Base URL of the service, e.g. `http://config-service:8081/api`.
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ClientSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.url.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "backend url must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(DomainError::InvalidArgument(format!(
                "timeout for {} must be greater than zero",
                self.url
            )));
        }
        Ok(())
    }
}

/// Settings for both backends. Both are required regardless of which record
/// types are actually queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderSettings {
    record_store: ClientSettings,
    certificate_store: ClientSettings,
}

impl ResponderSettings {
    pub fn new(
        record_store: ClientSettings,
        certificate_store: ClientSettings,
    ) -> Result<Self, DomainError> {
        record_store.validate()?;
        certificate_store.validate()?;
        Ok(Self {
            record_store,
            certificate_store,
        })
    }

    pub fn record_store(&self) -> &ClientSettings {
        &self.record_store
    }

    pub fn certificate_store(&self) -> &ClientSettings {
        &self.certificate_store
    }

    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        match (&config.record_store, &config.certificate_store) {
            (Some(records), Some(certificates)) => Self::new(records.clone(), certificates.clone()),
            (None, None) => Err(DomainError::InvalidArgument(
                "record_store and certificate_store settings not supplied".to_string(),
            )),
            (None, _) => Err(DomainError::InvalidArgument(
                "record_store settings not supplied".to_string(),
            )),
            (_, None) => Err(DomainError::InvalidArgument(
                "certificate_store settings not supplied".to_string(),
            )),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}
