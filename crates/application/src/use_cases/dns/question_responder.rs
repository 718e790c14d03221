use super::handlers::QuestionHandler;
use crate::ports::{CertificateStoreConnector, RecordStoreConnector};
use direct_dns_domain::{
    CertRecord, CertificateGetOptions, Config, DnsRequest, DnsResponse, DomainError,
    ResponderSettings,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Answers DNS questions from the record store and the certificate store.
///
/// Holds no per-request state; one instance can serve concurrent callers.
pub struct QuestionResponder {
    settings: ResponderSettings,
    records: Arc<dyn RecordStoreConnector>,
    certificates: Arc<dyn CertificateStoreConnector>,
}

impl QuestionResponder {
    pub fn new(
        settings: ResponderSettings,
        records: Arc<dyn RecordStoreConnector>,
        certificates: Arc<dyn CertificateStoreConnector>,
    ) -> Self {
        Self {
            settings,
            records,
            certificates,
        }
    }

    /// Fails with `InvalidArgument` unless both backends are configured.
    pub fn from_config(
        config: &Config,
        records: Arc<dyn RecordStoreConnector>,
        certificates: Arc<dyn CertificateStoreConnector>,
    ) -> Result<Self, DomainError> {
        let settings = ResponderSettings::from_config(config)?;
        Ok(Self::new(settings, records, certificates))
    }

    /// Builds the response for `request`.
    ///
    /// Requests without a question, with a class other than `IN`, or asking
    /// for a type that is not served get an empty response. Any backend
    /// failure is returned as `UpstreamUnavailable` and no partial response
    /// is produced.
    pub async fn answer(&self, request: &DnsRequest) -> Result<DnsResponse, DomainError> {
        let mut response = DnsResponse::new(request);

        let Some(question) = request.question() else {
            debug!(id = request.id, "Request carries no question");
            return Ok(response);
        };

        if !question.is_internet_class() {
            debug!(domain = %question.domain, class = %question.class, "Unsupported class");
            return Ok(response);
        }

        let Some(handler) = QuestionHandler::for_record_type(question.record_type) else {
            debug!(
                domain = %question.domain,
                record_type = %question.record_type,
                "Unsupported record type"
            );
            return Ok(response);
        };

        debug!(
            domain = %question.domain,
            record_type = %question.record_type,
            handler = ?handler,
            "Dispatching question"
        );

        let domain = question.domain.as_ref();
        let outcome = match handler {
            QuestionHandler::Address => self.process_aname(domain, &mut response).await,
            QuestionHandler::MailExchange => self.process_mx(domain, &mut response).await,
            QuestionHandler::Authority => self.process_soa(domain, &mut response).await,
            QuestionHandler::Certificate => self.process_cert(domain, &mut response).await,
        };

        if let Err(e) = outcome {
            warn!(
                error = %e,
                domain = %domain,
                backend = %handler.backend(),
                "Backend lookup failed"
            );
            return Err(DomainError::upstream(handler.backend(), e));
        }

        debug!(
            domain = %domain,
            answers = response.answer_count(),
            "Question answered"
        );

        Ok(response)
    }

    async fn process_aname(
        &self,
        domain: &str,
        response: &mut DnsResponse,
    ) -> Result<(), DomainError> {
        let client = self.records.connect(self.settings.record_store()).await?;
        let records = client.fetch_aname(domain).await?;
        response.extend_answers(records);
        Ok(())
    }

    async fn process_mx(
        &self,
        domain: &str,
        response: &mut DnsResponse,
    ) -> Result<(), DomainError> {
        let client = self.records.connect(self.settings.record_store()).await?;
        let records = client.fetch_mx(domain).await?;
        response.extend_answers(records);
        Ok(())
    }

    async fn process_soa(
        &self,
        domain: &str,
        response: &mut DnsResponse,
    ) -> Result<(), DomainError> {
        let client = self.records.connect(self.settings.record_store()).await?;
        let records = client.fetch_soa(domain).await?;
        response.extend_answers(records);
        Ok(())
    }

    async fn process_cert(
        &self,
        domain: &str,
        response: &mut DnsResponse,
    ) -> Result<(), DomainError> {
        let client = self
            .certificates
            .connect(self.settings.certificate_store())
            .await?;
        let certificates = client
            .get_certificates_for_owner(domain, CertificateGetOptions::with_data())
            .await?;
        response.extend_answers(
            certificates
                .iter()
                .map(|certificate| CertRecord::from_certificate(domain, certificate)),
        );
        Ok(())
    }
}
