// Remote event store: owner and only writer of the canonical collection.
//
// Purpose
// - Run the fetch lifecycle (idle -> loading -> succeeded | failed) around the remote source.
// - Append created records and merge registration updates into the canonical collection.
//
// Responsibilities
// - Publish every state change as a StoreSnapshot on a watch channel so observers re-render
//   instead of waiting on a remote call.
// - Replace the collection Arc on every write so consumers can detect a new collection by identity.
// - Recover network failures into the failed status; keep the last good collection (stale if error).
// - Surface integrity warnings without aborting the rest of the operation.
//   A successful fetch replaces them with the warnings of the fetched collection. Create
//   and update warnings accumulate until then, capped at MAX_INTEGRITY_WARNINGS.
// - A fetch clears the previous error when it starts.
//
// Concurrency
// - Overlapping fetches are not debounced. Each one applies its result when it resolves,
//   so the last to resolve wins.
// - A fetch spawned with spawn_fetch only holds a weak handle on the state. A result that
//   arrives after the store is dropped is discarded.

use crate::modules::events::adapters::outbound::events_remote::{
    EventsRemote, RegistrationPatch, RemoteError,
};
use crate::modules::events::application::errors::StoreError;
use crate::modules::events::core::event_record::{EventDetails, EventRecord};
use crate::modules::events::core::merge::{
    IntegrityWarning, find_duplicate_ids, merge_registration,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Upper bound on the warnings a snapshot carries between two successful fetches.
pub const MAX_INTEGRITY_WARNINGS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub status: FetchStatus,
    pub error: Option<String>,
    pub events: Arc<Vec<EventRecord>>,
    pub integrity_warnings: Vec<IntegrityWarning>,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            error: None,
            events: Arc::new(Vec::new()),
            integrity_warnings: Vec::new(),
        }
    }
}

pub struct RemoteEventStore<TRemote>
where
    TRemote: EventsRemote + ?Sized + 'static,
{
    remote: Arc<TRemote>,
    state: Arc<watch::Sender<StoreSnapshot>>,
}

impl<TRemote> RemoteEventStore<TRemote>
where
    TRemote: EventsRemote + ?Sized + 'static,
{
    pub fn new(remote: Arc<TRemote>) -> Self {
        let (state, _) = watch::channel(StoreSnapshot::default());
        Self {
            remote,
            state: Arc::new(state),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.state.borrow().status
    }

    pub fn events(&self) -> Arc<Vec<EventRecord>> {
        Arc::clone(&self.state.borrow().events)
    }

    pub fn find(&self, id: &str) -> Option<EventRecord> {
        self.state.borrow().events.iter().find(|record| record.id == id).cloned()
    }

    /// Drain the integrity warnings observed so far.
    pub fn take_integrity_warnings(&self) -> Vec<IntegrityWarning> {
        let mut taken = Vec::new();
        self.state.send_if_modified(|snapshot| {
            taken = std::mem::take(&mut snapshot.integrity_warnings);
            !taken.is_empty()
        });
        taken
    }

    /// Replace the canonical collection with the remote snapshot.
    /// Never fails: a network failure ends in FetchStatus::Failed with the previous collection kept.
    pub async fn fetch(&self) -> FetchStatus {
        begin_fetch(&self.state);
        let result = self.remote.list().await;
        complete_fetch(&self.state, result)
    }

    /// Same as fetch, but runs on the runtime. Resolves to None when the store was dropped first.
    pub fn spawn_fetch(&self) -> JoinHandle<Option<FetchStatus>> {
        begin_fetch(&self.state);
        let remote = Arc::clone(&self.remote);
        let state = Arc::downgrade(&self.state);
        tokio::spawn(async move {
            let result = remote.list().await;
            match state.upgrade() {
                Some(state) => Some(complete_fetch(&state, result)),
                None => {
                    debug!("event store dropped before fetch resolved, discarding result");
                    None
                }
            }
        })
    }

    /// Submit a new event. On success the created record is appended and a full fetch
    /// follows, so server-derived fields end up authoritative. The fetch outcome is
    /// reported through the status, not through this result.
    pub async fn create(&self, details: EventDetails) -> Result<EventRecord, StoreError> {
        details.validate(Utc::now())?;
        let created = self.remote.create(&details).await.map_err(|err| {
            warn!(error = %err, "event create failed");
            err
        })?;
        info!(id = %created.id, "event created");

        let mut warnings = Vec::new();
        self.state.send_modify(|snapshot| {
            let mut events = snapshot.events.as_ref().clone();
            events.push(created.clone());
            let occurrences = events.iter().filter(|record| record.id == created.id).count();
            if occurrences > 1 {
                warnings.push(IntegrityWarning::DuplicateId {
                    id: created.id.clone(),
                    occurrences,
                });
            }
            snapshot.events = Arc::new(events);
            retain_warnings(&mut snapshot.integrity_warnings, &warnings);
        });
        report(&warnings);

        self.fetch().await;
        Ok(created)
    }

    /// Apply a partial update remotely, then merge the returned record by id.
    /// A record missing from the canonical collection is an integrity warning, not an error.
    pub async fn update(&self, id: &str, patch: RegistrationPatch) -> Result<EventRecord, StoreError> {
        let updated = self.remote.patch(id, patch).await.map_err(|err| {
            warn!(%id, error = %err, "event update failed");
            err
        })?;
        info!(id = %updated.id, is_registered = updated.is_registered, "event updated");

        let mut warnings = Vec::new();
        self.state.send_modify(|snapshot| {
            let outcome = merge_registration(&snapshot.events, updated.clone());
            let target_found = !outcome
                .warnings
                .iter()
                .any(|w| matches!(w, IntegrityWarning::MissingMergeTarget { .. }));
            if target_found {
                snapshot.events = Arc::new(outcome.collection);
            }
            retain_warnings(&mut snapshot.integrity_warnings, &outcome.warnings);
            warnings = outcome.warnings;
        });
        report(&warnings);

        Ok(updated)
    }
}

fn begin_fetch(state: &watch::Sender<StoreSnapshot>) {
    debug!("fetching events");
    state.send_modify(|snapshot| {
        snapshot.status = FetchStatus::Loading;
        snapshot.error = None;
    });
}

fn complete_fetch(
    state: &watch::Sender<StoreSnapshot>,
    result: Result<Vec<EventRecord>, RemoteError>,
) -> FetchStatus {
    match result {
        Ok(records) => {
            let warnings = find_duplicate_ids(&records);
            info!(count = records.len(), "events fetched");
            state.send_modify(|snapshot| {
                snapshot.status = FetchStatus::Succeeded;
                snapshot.error = None;
                snapshot.events = Arc::new(records);
                snapshot.integrity_warnings = warnings.clone();
            });
            report(&warnings);
            FetchStatus::Succeeded
        }
        Err(err) => {
            warn!(error = %err, "event fetch failed, keeping last known events");
            state.send_modify(|snapshot| {
                snapshot.status = FetchStatus::Failed;
                snapshot.error = Some(err.to_string());
            });
            FetchStatus::Failed
        }
    }
}

/// Keep the newest warnings, at most MAX_INTEGRITY_WARNINGS of them.
fn retain_warnings(kept: &mut Vec<IntegrityWarning>, new: &[IntegrityWarning]) {
    kept.extend(new.iter().cloned());
    if kept.len() > MAX_INTEGRITY_WARNINGS {
        let overflow = kept.len() - MAX_INTEGRITY_WARNINGS;
        kept.drain(..overflow);
    }
}

fn report(warnings: &[IntegrityWarning]) {
    for warning in warnings {
        warn!(%warning, "integrity warning");
    }
}
