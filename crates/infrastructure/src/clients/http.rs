use direct_dns_domain::{Backend, ClientSettings, DomainError};
use serde::de::DeserializeOwned;
use tracing::debug;

/// A `reqwest` client scoped to one backend connection.
///
/// Every connection owns its own client and pool, so dropping it releases
/// any sockets it opened.
pub(super) struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    backend: Backend,
}

impl HttpBackend {
    pub(super) fn connect(
        settings: &ClientSettings,
        backend: Backend,
    ) -> Result<Self, DomainError> {
        settings.validate()?;

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| DomainError::UpstreamUnavailable {
                backend,
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: settings.base_url().to_string(),
            backend,
        })
    }

    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DomainError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, backend = %self.backend, "Fetching from backend");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamUnavailable {
                backend: self.backend,
                reason: format!("{} returned HTTP {}", url, status),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        serde_json::from_slice(&body).map_err(|e| {
            DomainError::InvalidBackendResponse(format!("{} sent undecodable body: {}", url, e))
        })
    }

    fn transport_error(&self, url: &str, error: reqwest::Error) -> DomainError {
        if error.is_timeout() {
            DomainError::BackendTimeout(url.to_string())
        } else {
            DomainError::UpstreamUnavailable {
                backend: self.backend,
                reason: format!("request to {} failed: {}", url, error),
            }
        }
    }
}
