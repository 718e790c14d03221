use super::dto::CertificateDto;
use super::http::HttpBackend;
use async_trait::async_trait;
use direct_dns_application::ports::{CertificateStoreClient, CertificateStoreConnector};
use direct_dns_domain::{Backend, Certificate, CertificateGetOptions, ClientSettings, DomainError};

/// Certificate store client speaking `GET {url}/certificates?owner=…`.
pub struct HttpCertificateStoreClient {
    http: HttpBackend,
}

impl HttpCertificateStoreClient {
    pub fn connect(settings: &ClientSettings) -> Result<Self, DomainError> {
        Ok(Self {
            http: HttpBackend::connect(settings, Backend::CertificateStore)?,
        })
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[async_trait]
impl CertificateStoreClient for HttpCertificateStoreClient {
    async fn get_certificates_for_owner(
        &self,
        owner: &str,
        options: CertificateGetOptions,
    ) -> Result<Vec<Certificate>, DomainError> {
        let certificates: Vec<CertificateDto> = self
            .http
            .get_json(
                "/certificates",
                &[
                    ("owner", owner),
                    ("includeData", flag(options.include_data)),
                    ("includePrivateKey", flag(options.include_private_key)),
                ],
            )
            .await?;

        certificates.into_iter().map(Certificate::try_from).collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpCertificateStoreConnector;

#[async_trait]
impl CertificateStoreConnector for HttpCertificateStoreConnector {
    async fn connect(
        &self,
        settings: &ClientSettings,
    ) -> Result<Box<dyn CertificateStoreClient>, DomainError> {
        Ok(Box::new(HttpCertificateStoreClient::connect(settings)?))
    }
}
