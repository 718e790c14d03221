use async_trait::async_trait;
use direct_dns_domain::{Certificate, CertificateGetOptions, ClientSettings, DomainError};

/// Connection to the certificate store. Released when dropped.
#[async_trait]
pub trait CertificateStoreClient: Send + Sync {
    /// All certificates owned by `owner`, in store order.
    async fn get_certificates_for_owner(
        &self,
        owner: &str,
        options: CertificateGetOptions,
    ) -> Result<Vec<Certificate>, DomainError>;
}

#[async_trait]
pub trait CertificateStoreConnector: Send + Sync {
    async fn connect(
        &self,
        settings: &ClientSettings,
    ) -> Result<Box<dyn CertificateStoreClient>, DomainError>;
}
