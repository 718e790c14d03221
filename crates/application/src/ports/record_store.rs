use async_trait::async_trait;
use direct_dns_domain::{AddressRecord, ClientSettings, DomainError, MxRecord, SoaRecord};

/// Connection to the record store. Released when dropped.
#[async_trait]
pub trait RecordStoreClient: Send + Sync {
    async fn fetch_aname(&self, domain: &str) -> Result<Vec<AddressRecord>, DomainError>;

    async fn fetch_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DomainError>;

    async fn fetch_soa(&self, domain: &str) -> Result<Vec<SoaRecord>, DomainError>;
}

#[async_trait]
pub trait RecordStoreConnector: Send + Sync {
    async fn connect(
        &self,
        settings: &ClientSettings,
    ) -> Result<Box<dyn RecordStoreClient>, DomainError>;
}
