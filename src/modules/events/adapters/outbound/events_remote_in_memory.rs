// In memory implementation of the EventsRemote port.
//
// Purpose
// - Support store tests and local development without a running events API.
//
// Responsibilities
// - Keep records in insertion order and assign UUIDv7 ids on create.
// - Simulate an unreachable remote and slow list calls.
// - Count list calls so callers can verify a refetch happened.

use crate::modules::events::adapters::outbound::events_remote::{
    EventsRemote, RegistrationPatch, RemoteError,
};
use crate::modules::events::core::event_record::{EventDetails, EventRecord};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryEventsRemote {
    rows: RwLock<Vec<EventRecord>>,
    is_offline: AtomicBool,
    list_delay_ms: AtomicU64,
    list_calls: AtomicUsize,
}

impl InMemoryEventsRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<EventRecord>) -> Self {
        Self {
            rows: RwLock::new(records),
            ..Self::default()
        }
    }

    pub async fn seed(&self, record: EventRecord) {
        self.rows.write().await.push(record);
    }

    pub async fn records(&self) -> Vec<EventRecord> {
        self.rows.read().await.clone()
    }

    pub fn set_offline(&self, offline: bool) {
        self.is_offline.store(offline, Ordering::SeqCst);
    }

    pub fn set_list_delay_ms(&self, ms: u64) {
        self.list_delay_ms.store(ms, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), RemoteError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(RemoteError::Unavailable("Events remote offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventsRemote for InMemoryEventsRemote {
    async fn list(&self) -> Result<Vec<EventRecord>, RemoteError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.list_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.ensure_online()?;
        Ok(self.rows.read().await.clone())
    }

    async fn create(&self, details: &EventDetails) -> Result<EventRecord, RemoteError> {
        self.ensure_online()?;
        let record = EventRecord::new(Uuid::now_v7().to_string(), details.clone());
        self.rows.write().await.push(record.clone());
        Ok(record)
    }

    async fn patch(&self, id: &str, patch: RegistrationPatch) -> Result<EventRecord, RemoteError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let record = guard
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| RemoteError::Status {
                status: 404,
                message: format!("event {id} not found"),
            })?;
        record.is_registered = patch.is_registered;
        Ok(record.clone())
    }
}
