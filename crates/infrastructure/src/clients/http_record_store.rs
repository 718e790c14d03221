use super::http::HttpBackend;
use async_trait::async_trait;
use direct_dns_application::ports::{RecordStoreClient, RecordStoreConnector};
use direct_dns_domain::{AddressRecord, Backend, ClientSettings, DomainError, MxRecord, SoaRecord};

/// Record store client speaking `GET {url}/dns/records/{type}?domain=…`.
pub struct HttpRecordStoreClient {
    http: HttpBackend,
}

impl HttpRecordStoreClient {
    pub fn connect(settings: &ClientSettings) -> Result<Self, DomainError> {
        Ok(Self {
            http: HttpBackend::connect(settings, Backend::RecordStore)?,
        })
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        kind: &str,
        domain: &str,
    ) -> Result<Vec<T>, DomainError> {
        self.http
            .get_json(&format!("/dns/records/{}", kind), &[("domain", domain)])
            .await
    }
}

#[async_trait]
impl RecordStoreClient for HttpRecordStoreClient {
    async fn fetch_aname(&self, domain: &str) -> Result<Vec<AddressRecord>, DomainError> {
        self.fetch("aname", domain).await
    }

    async fn fetch_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DomainError> {
        self.fetch("mx", domain).await
    }

    async fn fetch_soa(&self, domain: &str) -> Result<Vec<SoaRecord>, DomainError> {
        self.fetch("soa", domain).await
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRecordStoreConnector;

#[async_trait]
impl RecordStoreConnector for HttpRecordStoreConnector {
    async fn connect(
        &self,
        settings: &ClientSettings,
    ) -> Result<Box<dyn RecordStoreClient>, DomainError> {
        Ok(Box::new(HttpRecordStoreClient::connect(settings)?))
    }
}
