use crate::dns_question::Question;
use crate::dns_record::AnswerRecord;
use crate::dns_request::DnsRequest;

/// Response built for a single request.
///
/// Answers can only be appended; they are never removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResponse {
    request: DnsRequest,
    answers: Vec<AnswerRecord>,
}

impl DnsResponse {
    pub fn new(request: &DnsRequest) -> Self {
        Self {
            request: request.clone(),
            answers: Vec::new(),
        }
    }

    pub fn request(&self) -> &DnsRequest {
        &self.request
    }

    pub fn question(&self) -> Option<&Question> {
        self.request.question()
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn push_answer(&mut self, answer: impl Into<AnswerRecord>) {
        self.answers.push(answer.into());
    }

    pub fn extend_answers<I, R>(&mut self, answers: I)
    where
        I: IntoIterator<Item = R>,
        R: Into<AnswerRecord>,
    {
        self.answers.extend(answers.into_iter().map(Into::into));
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }
}
