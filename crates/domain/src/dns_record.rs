pub mod answer;
pub mod dns_class;
pub mod record_type;

pub use answer::{
    AddressRecord, AnswerRecord, CertRecord, CertType, MxRecord, SoaRecord, DEFAULT_CERT_TTL,
};
pub use dns_class::DnsClass;
pub use record_type::RecordType;
