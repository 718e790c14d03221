use direct_dns_domain::{Backend, RecordType};

/// Per-type strategy selected for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionHandler {
    Address,
    MailExchange,
    Authority,
    Certificate,
}

impl QuestionHandler {
    /// `None` means the type is not answered; the response stays empty.
    pub fn for_record_type(record_type: RecordType) -> Option<Self> {
        match record_type {
            RecordType::ANAME => Some(QuestionHandler::Address),
            RecordType::MX => Some(QuestionHandler::MailExchange),
            RecordType::SOA => Some(QuestionHandler::Authority),
            RecordType::CERT => Some(QuestionHandler::Certificate),
            _ => None,
        }
    }

    pub fn backend(&self) -> Backend {
        match self {
            QuestionHandler::Certificate => Backend::CertificateStore,
            _ => Backend::RecordStore,
        }
    }
}
