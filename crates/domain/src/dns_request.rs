use crate::dns_question::Question;

/// A decoded DNS request. Carries at most one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRequest {
    pub id: u16,
    pub question: Option<Question>,
}

impl DnsRequest {
    pub fn new(question: Question) -> Self {
        Self {
            id: 0,
            question: Some(question),
        }
    }

    pub fn with_id(id: u16, question: Option<Question>) -> Self {
        Self { id, question }
    }

    pub fn without_question(id: u16) -> Self {
        Self { id, question: None }
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }
}
