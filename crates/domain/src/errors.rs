use std::fmt;
use thiserror::Error;

/// Backend a failed fetch originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    RecordStore,
    CertificateStore,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::RecordStore => "record store",
            Backend::CertificateStore => "certificate store",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Upstream {backend} unavailable: {reason}")]
    UpstreamUnavailable { backend: Backend, reason: String },

    #[error("Invalid backend response: {0}")]
    InvalidBackendResponse(String),

    #[error("Backend timeout: {0}")]
    BackendTimeout(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Wraps any failure raised while talking to `backend`.
    ///
    /// Errors that are already `UpstreamUnavailable` are passed through so the
    /// original backend attribution is kept.
    pub fn upstream(backend: Backend, source: DomainError) -> Self {
        match source {
            already @ DomainError::UpstreamUnavailable { .. } => already,
            other => DomainError::UpstreamUnavailable {
                backend,
                reason: other.to_string(),
            },
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidArgument(_)
                | DomainError::InvalidDomainName(_)
                | DomainError::InvalidDnsMessage(_)
        )
    }
}
