use direct_dns_domain::{AnswerRecord, DnsResponse};
use std::fmt::Write;

/// Renders answers in zone-file presentation, one record per line.
pub fn render_answers(response: &DnsResponse) -> String {
    let mut out = String::new();
    for answer in response.answers() {
        let _ = writeln!(out, "{}", render_answer(answer));
    }
    out
}

pub fn render_answer(answer: &AnswerRecord) -> String {
    let head = format!(
        "{}.\t{}\tIN\t{}",
        answer.name().trim_end_matches('.'),
        answer.ttl(),
        answer.record_type()
    );

    match answer {
        AnswerRecord::Address(record) => format!("{}\t{}", head, record.address),
        AnswerRecord::MailExchange(record) => format!(
            "{}\t{} {}.",
            head,
            record.preference,
            fqdn(&record.exchange)
        ),
        AnswerRecord::Authority(record) => format!(
            "{}\t{}. {}. {} {} {} {} {}",
            head,
            fqdn(&record.primary_name_server),
            fqdn(&record.responsible_mailbox),
            record.serial,
            record.refresh,
            record.retry,
            record.expire,
            record.minimum
        ),
        AnswerRecord::Cert(record) => format!(
            "{}\t{} {} {} ({} bytes)",
            head,
            record.cert_type.to_u16(),
            record.key_tag,
            record.algorithm,
            record.data.len()
        ),
    }
}

fn fqdn(name: &str) -> &str {
    name.trim_end_matches('.')
}
