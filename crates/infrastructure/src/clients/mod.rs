//! HTTP/JSON clients for the record store and the certificate store.

mod dto;
mod http;
mod http_certificate_store;
mod http_record_store;

pub use http_certificate_store::{HttpCertificateStoreClient, HttpCertificateStoreConnector};
pub use http_record_store::{HttpRecordStoreClient, HttpRecordStoreConnector};
