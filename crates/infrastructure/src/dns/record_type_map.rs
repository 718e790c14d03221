//! Mapping between the domain's `RecordType`/`DnsClass` and their
//! `hickory_proto` counterparts.

use direct_dns_domain::{DnsClass, RecordType};
use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::ANAME => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::ANY => HickoryRecordType::ANY,
            // no dedicated variant in every hickory release, go through the code
            RecordType::CERT | RecordType::Unknown(_) => {
                HickoryRecordType::from(record_type.to_u16())
            }
        }
    }

    /// Every hickory type maps to something; unnamed codes become `Unknown`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}

pub struct DnsClassMapper;

impl DnsClassMapper {
    pub fn to_hickory(class: DnsClass) -> DNSClass {
        match class {
            DnsClass::IN => DNSClass::IN,
            DnsClass::CH => DNSClass::CH,
            DnsClass::HS => DNSClass::HS,
            DnsClass::NONE => DNSClass::NONE,
            DnsClass::ANY => DNSClass::ANY,
            DnsClass::Unknown(code) => DNSClass::from(code),
        }
    }

    pub fn from_hickory(class: DNSClass) -> DnsClass {
        match class {
            DNSClass::IN => DnsClass::IN,
            DNSClass::CH => DnsClass::CH,
            DNSClass::HS => DnsClass::HS,
            DNSClass::NONE => DnsClass::NONE,
            DNSClass::ANY => DnsClass::ANY,
            other => DnsClass::from_u16(u16::from(other)),
        }
    }
}
