use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    #[default]
    New,
    Enabled,
    Disabled,
}

/// An X.509 certificate held by the certificate store for an owner
/// (a domain or a mailbox within it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub id: i64,
    pub owner: String,
    pub thumbprint: Option<String>,
    /// DER encoded certificate. Empty unless the store was asked to include data.
    pub data: Vec<u8>,
    pub status: EntityStatus,
    pub valid_start: Option<DateTime<Utc>>,
    pub valid_end: Option<DateTime<Utc>>,
    pub create_time: Option<DateTime<Utc>>,
}

impl Certificate {
    pub fn new(owner: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: 0,
            owner: owner.into(),
            thumbprint: None,
            data,
            status: EntityStatus::New,
            valid_start: None,
            valid_end: None,
            create_time: None,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

/// Options passed to the certificate store on lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CertificateGetOptions {
    pub include_data: bool,
    pub include_private_key: bool,
}

impl CertificateGetOptions {
    pub fn with_data() -> Self {
        Self {
            include_data: true,
            include_private_key: false,
        }
    }
}
