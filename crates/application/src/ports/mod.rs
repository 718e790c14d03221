mod certificate_store;
mod record_store;

pub use certificate_store::{CertificateStoreClient, CertificateStoreConnector};
pub use record_store::{RecordStoreClient, RecordStoreConnector};
