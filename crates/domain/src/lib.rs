//! Direct DNS Domain Layer
pub mod certificate;
pub mod config;
pub mod dns_question;
pub mod dns_record;
pub mod dns_request;
pub mod dns_response;
pub mod errors;

pub use certificate::{Certificate, CertificateGetOptions, EntityStatus};
pub use config::{CliOverrides, ClientSettings, Config, ConfigError, ResponderSettings};
pub use dns_question::Question;
pub use dns_record::{
    AddressRecord, AnswerRecord, CertRecord, CertType, DnsClass, MxRecord, RecordType, SoaRecord,
};
pub use dns_request::DnsRequest;
pub use dns_response::DnsResponse;
pub use errors::{Backend, DomainError};
