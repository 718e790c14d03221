use super::RecordType;
use crate::Certificate;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// TTL given to CERT answers; certificates carry no TTL of their own.
pub const DEFAULT_CERT_TTL: u32 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub name: String,
    pub ttl: u32,
    pub address: Ipv4Addr,
}

impl AddressRecord {
    pub fn new(name: impl Into<String>, ttl: u32, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            ttl,
            address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxRecord {
    pub name: String,
    pub ttl: u32,
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(
        name: impl Into<String>,
        ttl: u32,
        preference: u16,
        exchange: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ttl,
            preference,
            exchange: exchange.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoaRecord {
    pub name: String,
    pub ttl: u32,
    pub primary_name_server: String,
    pub responsible_mailbox: String,
    pub serial: u32,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
    pub minimum: u32,
}

/// Certificate type field of a CERT record (RFC 4398 §2.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertType {
    Pkix,
    Spki,
    Pgp,
    Ipkix,
    Ispki,
    Ipgp,
    Acpkix,
    Iacpkix,
    Uri,
    Oid,
    Other(u16),
}

impl CertType {
    pub fn to_u16(&self) -> u16 {
        match self {
            CertType::Pkix => 1,
            CertType::Spki => 2,
            CertType::Pgp => 3,
            CertType::Ipkix => 4,
            CertType::Ispki => 5,
            CertType::Ipgp => 6,
            CertType::Acpkix => 7,
            CertType::Iacpkix => 8,
            CertType::Uri => 253,
            CertType::Oid => 254,
            CertType::Other(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => CertType::Pkix,
            2 => CertType::Spki,
            3 => CertType::Pgp,
            4 => CertType::Ipkix,
            5 => CertType::Ispki,
            6 => CertType::Ipgp,
            7 => CertType::Acpkix,
            8 => CertType::Iacpkix,
            253 => CertType::Uri,
            254 => CertType::Oid,
            other => CertType::Other(other),
        }
    }
}

/// CERT answer carrying a DER encoded X.509 certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertRecord {
    pub name: String,
    pub ttl: u32,
    pub cert_type: CertType,
    pub key_tag: u16,
    pub algorithm: u8,
    pub data: Vec<u8>,
}

impl CertRecord {
    /// Wraps raw X.509 data as a PKIX CERT record owned by `name`.
    pub fn x509(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            ttl: DEFAULT_CERT_TTL,
            cert_type: CertType::Pkix,
            key_tag: 0,
            algorithm: 0,
            data,
        }
    }

    pub fn from_certificate(name: impl Into<String>, certificate: &Certificate) -> Self {
        Self::x509(name, certificate.data.clone())
    }

    /// RDATA octets: type (2), key tag (2), algorithm (1), certificate.
    pub fn to_rdata(&self) -> Vec<u8> {
        let mut rdata = Vec::with_capacity(5 + self.data.len());
        rdata.extend_from_slice(&self.cert_type.to_u16().to_be_bytes());
        rdata.extend_from_slice(&self.key_tag.to_be_bytes());
        rdata.push(self.algorithm);
        rdata.extend_from_slice(&self.data);
        rdata
    }
}

/// One resource record in the answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerRecord {
    Address(AddressRecord),
    MailExchange(MxRecord),
    Authority(SoaRecord),
    Cert(CertRecord),
}

impl AnswerRecord {
    pub fn name(&self) -> &str {
        match self {
            AnswerRecord::Address(r) => &r.name,
            AnswerRecord::MailExchange(r) => &r.name,
            AnswerRecord::Authority(r) => &r.name,
            AnswerRecord::Cert(r) => &r.name,
        }
    }

    pub fn ttl(&self) -> u32 {
        match self {
            AnswerRecord::Address(r) => r.ttl,
            AnswerRecord::MailExchange(r) => r.ttl,
            AnswerRecord::Authority(r) => r.ttl,
            AnswerRecord::Cert(r) => r.ttl,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            AnswerRecord::Address(_) => RecordType::ANAME,
            AnswerRecord::MailExchange(_) => RecordType::MX,
            AnswerRecord::Authority(_) => RecordType::SOA,
            AnswerRecord::Cert(_) => RecordType::CERT,
        }
    }
}

impl From<AddressRecord> for AnswerRecord {
    fn from(record: AddressRecord) -> Self {
        AnswerRecord::Address(record)
    }
}

impl From<MxRecord> for AnswerRecord {
    fn from(record: MxRecord) -> Self {
        AnswerRecord::MailExchange(record)
    }
}

impl From<SoaRecord> for AnswerRecord {
    fn from(record: SoaRecord) -> Self {
        AnswerRecord::Authority(record)
    }
}

impl From<CertRecord> for AnswerRecord {
    fn from(record: CertRecord) -> Self {
        AnswerRecord::Cert(record)
    }
}
