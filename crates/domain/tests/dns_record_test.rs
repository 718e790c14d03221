use direct_dns_domain::{CertRecord, CertType, DnsClass, RecordType};
use std::str::FromStr;

mod helpers;
use helpers::CertificateBuilder;

#[test]
fn test_record_type_codes() {
    assert_eq!(RecordType::ANAME.to_u16(), 1);
    assert_eq!(RecordType::SOA.to_u16(), 6);
    assert_eq!(RecordType::MX.to_u16(), 15);
    assert_eq!(RecordType::CERT.to_u16(), 37);
}

#[test]
fn test_record_type_from_u16_roundtrips_known_codes() {
    for record_type in [
        RecordType::ANAME,
        RecordType::NS,
        RecordType::CNAME,
        RecordType::SOA,
        RecordType::PTR,
        RecordType::MX,
        RecordType::TXT,
        RecordType::AAAA,
        RecordType::SRV,
        RecordType::CERT,
        RecordType::ANY,
    ] {
        assert_eq!(RecordType::from_u16(record_type.to_u16()), record_type);
    }
}

#[test]
fn test_record_type_unknown_code_preserved() {
    let record_type = RecordType::from_u16(65_000);
    assert_eq!(record_type, RecordType::Unknown(65_000));
    assert_eq!(record_type.to_u16(), 65_000);
    assert_eq!(record_type.to_string(), "TYPE65000");
}

#[test]
fn test_record_type_from_str() {
    assert_eq!(RecordType::from_str("a").unwrap(), RecordType::ANAME);
    assert_eq!(RecordType::from_str("aname").unwrap(), RecordType::ANAME);
    assert_eq!(RecordType::from_str("Cert").unwrap(), RecordType::CERT);
    assert_eq!(
        RecordType::from_str("TYPE99").unwrap(),
        RecordType::Unknown(99)
    );
    assert!(RecordType::from_str("BOGUS").is_err());
}

#[test]
fn test_dns_class_parsing() {
    assert_eq!(DnsClass::from_str("in").unwrap(), DnsClass::IN);
    assert_eq!(DnsClass::from_str("CHAOS").unwrap(), DnsClass::CH);
    assert_eq!(DnsClass::from_u16(42), DnsClass::Unknown(42));
    assert_eq!(DnsClass::default(), DnsClass::IN);
}

#[test]
fn test_cert_record_wraps_certificate_data() {
    let certificate = CertificateBuilder::new().data(&[1, 2, 3, 4]).build();

    let record = CertRecord::from_certificate("example.com", &certificate);

    assert_eq!(record.name, "example.com");
    assert_eq!(record.cert_type, CertType::Pkix);
    assert_eq!(record.data, vec![1, 2, 3, 4]);
    assert_eq!(&record.to_rdata()[5..], &[1, 2, 3, 4]);
}
