use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use direct_dns_domain::{Certificate, DomainError, EntityStatus};
use serde::Deserialize;

/// Certificate as served by the certificate store. `data` is base64 DER.
#[derive(Debug, Deserialize)]
pub(super) struct CertificateDto {
    #[serde(default)]
    pub id: i64,
    pub owner: String,
    #[serde(default)]
    pub thumbprint: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub valid_start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub valid_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
}

impl TryFrom<CertificateDto> for Certificate {
    type Error = DomainError;

    fn try_from(dto: CertificateDto) -> Result<Self, Self::Error> {
        let data = match dto.data.as_deref() {
            Some(encoded) => STANDARD.decode(encoded.trim()).map_err(|e| {
                DomainError::InvalidBackendResponse(format!(
                    "certificate {} for {} has invalid data: {}",
                    dto.id, dto.owner, e
                ))
            })?,
            None => Vec::new(),
        };

        Ok(Certificate {
            id: dto.id,
            owner: dto.owner,
            thumbprint: dto.thumbprint,
            data,
            status: dto.status,
            valid_start: dto.valid_start_date,
            valid_end: dto.valid_end_date,
            create_time: dto.create_time,
        })
    }
}
