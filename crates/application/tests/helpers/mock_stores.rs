#![allow(dead_code)]

use async_trait::async_trait;
use direct_dns_application::ports::{
    CertificateStoreClient, CertificateStoreConnector, RecordStoreClient, RecordStoreConnector,
};
use direct_dns_domain::{
    AddressRecord, Certificate, CertificateGetOptions, ClientSettings, DomainError, MxRecord,
    SoaRecord,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Counts connections handed out and connections dropped.
#[derive(Default)]
pub struct ConnectionTracker {
    opened: AtomicUsize,
    released: AtomicUsize,
}

impl ConnectionTracker {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    pub fn open_now(&self) -> usize {
        self.opened() - self.released()
    }

    fn open(self: &Arc<Self>) -> ConnectionGuard {
        self.opened.fetch_add(1, Ordering::SeqCst);
        ConnectionGuard {
            tracker: Arc::clone(self),
        }
    }
}

struct ConnectionGuard {
    tracker: Arc<ConnectionTracker>,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.tracker.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct RecordData {
    aname: HashMap<String, Vec<AddressRecord>>,
    mx: HashMap<String, Vec<MxRecord>>,
    soa: HashMap<String, Vec<SoaRecord>>,
    fetch_error: Option<DomainError>,
    connect_error: Option<DomainError>,
    queried_domains: Vec<String>,
}

#[derive(Clone, Default)]
pub struct MockRecordStore {
    data: Arc<Mutex<RecordData>>,
    tracker: Arc<ConnectionTracker>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_aname(&self, domain: &str, records: Vec<AddressRecord>) {
        self.data
            .lock()
            .unwrap()
            .aname
            .insert(domain.to_string(), records);
    }

    pub fn set_mx(&self, domain: &str, records: Vec<MxRecord>) {
        self.data
            .lock()
            .unwrap()
            .mx
            .insert(domain.to_string(), records);
    }

    pub fn set_soa(&self, domain: &str, records: Vec<SoaRecord>) {
        self.data
            .lock()
            .unwrap()
            .soa
            .insert(domain.to_string(), records);
    }

    pub fn fail_fetch_with(&self, error: DomainError) {
        self.data.lock().unwrap().fetch_error = Some(error);
    }

    pub fn fail_connect_with(&self, error: DomainError) {
        self.data.lock().unwrap().connect_error = Some(error);
    }

    pub fn tracker(&self) -> &ConnectionTracker {
        &self.tracker
    }

    pub fn queried_domains(&self) -> Vec<String> {
        self.data.lock().unwrap().queried_domains.clone()
    }

    fn lookup<T: Clone>(
        &self,
        domain: &str,
        select: impl Fn(&RecordData) -> &HashMap<String, Vec<T>>,
    ) -> Result<Vec<T>, DomainError> {
        let mut data = self.data.lock().unwrap();
        data.queried_domains.push(domain.to_string());
        if let Some(err) = data.fetch_error.clone() {
            return Err(err);
        }
        Ok(select(&*data).get(domain).cloned().unwrap_or_default())
    }
}

struct MockRecordClient {
    store: MockRecordStore,
    _guard: ConnectionGuard,
}

#[async_trait]
impl RecordStoreClient for MockRecordClient {
    async fn fetch_aname(&self, domain: &str) -> Result<Vec<AddressRecord>, DomainError> {
        self.store.lookup(domain, |data| &data.aname)
    }

    async fn fetch_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DomainError> {
        self.store.lookup(domain, |data| &data.mx)
    }

    async fn fetch_soa(&self, domain: &str) -> Result<Vec<SoaRecord>, DomainError> {
        self.store.lookup(domain, |data| &data.soa)
    }
}

#[async_trait]
impl RecordStoreConnector for MockRecordStore {
    async fn connect(
        &self,
        _settings: &ClientSettings,
    ) -> Result<Box<dyn RecordStoreClient>, DomainError> {
        if let Some(err) = self.data.lock().unwrap().connect_error.clone() {
            return Err(err);
        }
        Ok(Box::new(MockRecordClient {
            store: self.clone(),
            _guard: self.tracker.open(),
        }))
    }
}

#[derive(Default)]
struct CertificateData {
    by_owner: HashMap<String, Vec<Certificate>>,
    fetch_error: Option<DomainError>,
    requested_options: Vec<CertificateGetOptions>,
}

#[derive(Clone, Default)]
pub struct MockCertificateStore {
    data: Arc<Mutex<CertificateData>>,
    tracker: Arc<ConnectionTracker>,
}

impl MockCertificateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_certificates(&self, owner: &str, certificates: Vec<Certificate>) {
        self.data
            .lock()
            .unwrap()
            .by_owner
            .insert(owner.to_string(), certificates);
    }

    pub fn fail_fetch_with(&self, error: DomainError) {
        self.data.lock().unwrap().fetch_error = Some(error);
    }

    pub fn tracker(&self) -> &ConnectionTracker {
        &self.tracker
    }

    pub fn requested_options(&self) -> Vec<CertificateGetOptions> {
        self.data.lock().unwrap().requested_options.clone()
    }
}

struct MockCertificateClient {
    store: MockCertificateStore,
    _guard: ConnectionGuard,
}

#[async_trait]
impl CertificateStoreClient for MockCertificateClient {
    async fn get_certificates_for_owner(
        &self,
        owner: &str,
        options: CertificateGetOptions,
    ) -> Result<Vec<Certificate>, DomainError> {
        let mut data = self.store.data.lock().unwrap();
        data.requested_options.push(options);
        if let Some(err) = data.fetch_error.clone() {
            return Err(err);
        }
        Ok(data.by_owner.get(owner).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl CertificateStoreConnector for MockCertificateStore {
    async fn connect(
        &self,
        _settings: &ClientSettings,
    ) -> Result<Box<dyn CertificateStoreClient>, DomainError> {
        Ok(Box::new(MockCertificateClient {
            store: self.clone(),
            _guard: self.tracker.open(),
        }))
    }
}
