use crate::dns_record::{DnsClass, RecordType};
use crate::DomainError;
use std::sync::Arc;

/// How the root zone is spelled in a question.
const ROOT_DOMAIN: &str = ".";

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// The (domain, class, type) triple a request asks about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub domain: Arc<str>,
    pub class: DnsClass,
    pub record_type: RecordType,
}

impl Question {
    /// Builds a question, stripping the trailing root dot from `domain`.
    ///
    /// `"."` is kept as is and names the root zone. Other names must be
    /// ASCII presentation form within the RFC 1035 length limits.
    pub fn new(
        domain: &str,
        class: DnsClass,
        record_type: RecordType,
    ) -> Result<Self, DomainError> {
        let normalized = normalize(domain);
        if normalized != ROOT_DOMAIN {
            validate_domain(normalized)?;
        }
        Ok(Self::from_checked_name(normalized, class, record_type))
    }

    /// Builds a question from a name a wire parser has already accepted.
    ///
    /// Only the trailing dot is stripped; length limits are not checked again.
    pub fn from_wire_name(domain: &str, class: DnsClass, record_type: RecordType) -> Self {
        Self::from_checked_name(normalize(domain), class, record_type)
    }

    fn from_checked_name(domain: &str, class: DnsClass, record_type: RecordType) -> Self {
        Self {
            domain: Arc::from(domain),
            class,
            record_type,
        }
    }

    /// Shorthand for an `IN` class question.
    pub fn internet(domain: &str, record_type: RecordType) -> Result<Self, DomainError> {
        Self::new(domain, DnsClass::IN, record_type)
    }

    pub fn is_internet_class(&self) -> bool {
        self.class == DnsClass::IN
    }
}

fn normalize(domain: &str) -> &str {
    let trimmed = domain.trim_end_matches('.');
    if trimmed.is_empty() && !domain.is_empty() {
        ROOT_DOMAIN
    } else {
        trimmed
    }
}

fn validate_domain(domain: &str) -> Result<(), DomainError> {
    if domain.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "domain name is empty".to_string(),
        ));
    }

    if domain.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "{} exceeds {} octets",
            domain, MAX_NAME_LEN
        )));
    }

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "{} contains an empty label",
                domain
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} octets",
                label, MAX_LABEL_LEN
            )));
        }
    }

    Ok(())
}
