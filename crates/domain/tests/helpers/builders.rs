#![allow(dead_code)]
use chrono::{DateTime, Utc};
use direct_dns_domain::{Certificate, EntityStatus};

pub struct CertificateBuilder {
    id: i64,
    owner: String,
    thumbprint: Option<String>,
    data: Vec<u8>,
    status: EntityStatus,
    valid_start: Option<DateTime<Utc>>,
    valid_end: Option<DateTime<Utc>>,
}

impl CertificateBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            owner: "example.com".to_string(),
            thumbprint: None,
            data: vec![0x30, 0x82, 0x02, 0x0a],
            status: EntityStatus::Enabled,
            valid_start: None,
            valid_end: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.owner = owner.to_string();
        self
    }

    pub fn data(mut self, data: &[u8]) -> Self {
        self.data = data.to_vec();
        self
    }

    pub fn status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    pub fn valid_between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.valid_start = Some(start);
        self.valid_end = Some(end);
        self
    }

    pub fn build(self) -> Certificate {
        Certificate {
            id: self.id,
            owner: self.owner,
            thumbprint: self.thumbprint,
            data: self.data,
            status: self.status,
            valid_start: self.valid_start,
            valid_end: self.valid_end,
            create_time: None,
        }
    }
}

impl Default for CertificateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
