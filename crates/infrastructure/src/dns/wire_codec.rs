//! Wire-format glue between `hickory-proto` messages and the responder's
//! request/response types.
//!
//! Only the first question of a query is honoured. Answers are rendered as:
//! - ANAME → `A`
//! - MX → `MX`
//! - SOA → `SOA`
//! - CERT → type 37 with raw RFC 4398 RDATA

use super::record_type_map::{DnsClassMapper, RecordTypeMapper};
use direct_dns_domain::{
    AnswerRecord, DnsRequest, DnsResponse, DomainError, Question, SoaRecord,
};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, MX, NULL, SOA};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use tracing::debug;

pub struct WireCodec;

impl WireCodec {
    /// Decodes a query message into a request.
    ///
    /// Fails with `InvalidArgument` for anything that is not a standard query.
    pub fn decode_request(bytes: &[u8]) -> Result<DnsRequest, DomainError> {
        let message = Message::from_vec(bytes)
            .map_err(|e| DomainError::InvalidDnsMessage(format!("Failed to parse: {}", e)))?;

        if message.message_type() != MessageType::Query {
            return Err(DomainError::InvalidArgument(
                "message is not a query".to_string(),
            ));
        }
        if message.op_code() != OpCode::Query {
            return Err(DomainError::InvalidArgument(format!(
                "unsupported opcode {:?}",
                message.op_code()
            )));
        }

        let Some(query) = message.queries().first() else {
            return Ok(DnsRequest::without_question(message.id()));
        };

        if message.queries().len() > 1 {
            debug!(
                count = message.queries().len(),
                "Ignoring all but the first question"
            );
        }

        // ACE form, so IDN labels reach the backends the way they are stored.
        let question = Question::from_wire_name(
            &query.name().to_ascii(),
            DnsClassMapper::from_hickory(query.query_class()),
            RecordTypeMapper::from_hickory(query.query_type()),
        );

        Ok(DnsRequest::with_id(message.id(), Some(question)))
    }

    /// Encodes an authoritative NOERROR response carrying every answer.
    pub fn encode_response(response: &DnsResponse) -> Result<Vec<u8>, DomainError> {
        let mut message = Self::response_message(response.request(), ResponseCode::NoError)?;

        for answer in response.answers() {
            message.add_answer(Self::to_record(answer)?);
        }

        Self::serialize_message(&message)
    }

    /// Encodes an empty response whose RCODE reflects `error`.
    pub fn encode_error(request: &DnsRequest, error: &DomainError) -> Result<Vec<u8>, DomainError> {
        let message = Self::response_message(request, Self::response_code_for(error))?;
        Self::serialize_message(&message)
    }

    /// Client errors are FORMERR; everything else, backend failures
    /// included, is SERVFAIL.
    pub fn response_code_for(error: &DomainError) -> ResponseCode {
        if error.is_client_error() {
            ResponseCode::FormErr
        } else {
            ResponseCode::ServFail
        }
    }

    fn response_message(request: &DnsRequest, code: ResponseCode) -> Result<Message, DomainError> {
        let mut message = Message::new(request.id, MessageType::Response, OpCode::Query);
        message.set_authoritative(true);
        message.set_response_code(code);

        if let Some(question) = request.question() {
            let mut query = Query::new();
            query.set_name(Self::name(&question.domain)?);
            query.set_query_type(RecordTypeMapper::to_hickory(question.record_type));
            query.set_query_class(DnsClassMapper::to_hickory(question.class));
            message.add_query(query);
        }

        Ok(message)
    }

    fn to_record(answer: &AnswerRecord) -> Result<Record, DomainError> {
        let name = Self::name(answer.name())?;

        let rdata = match answer {
            AnswerRecord::Address(record) => RData::A(A(record.address)),
            AnswerRecord::MailExchange(record) => {
                RData::MX(MX::new(record.preference, Self::name(&record.exchange)?))
            }
            AnswerRecord::Authority(record) => RData::SOA(Self::soa(record)?),
            AnswerRecord::Cert(record) => RData::Unknown {
                code: RecordTypeMapper::to_hickory(answer.record_type()),
                rdata: NULL::with(record.to_rdata()),
            },
        };

        Ok(Record::from_rdata(name, answer.ttl(), rdata))
    }

    fn soa(record: &SoaRecord) -> Result<SOA, DomainError> {
        Ok(SOA::new(
            Self::name(&record.primary_name_server)?,
            Self::name(&record.responsible_mailbox)?,
            record.serial,
            record.refresh,
            record.retry,
            record.expire,
            record.minimum,
        ))
    }

    fn name(domain: &str) -> Result<Name, DomainError> {
        let fqdn = if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{}.", domain)
        };
        Name::from_str(&fqdn).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
