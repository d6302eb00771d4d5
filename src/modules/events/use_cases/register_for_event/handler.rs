// Register intent: the presentation asks to register for an event by id.
//
// Responsibilities
// - Send the registration patch through the store, which merges the returned record.
// - Return the merged record or the failure, so the caller can show a notification.

use crate::modules::events::adapters::outbound::events_remote::{EventsRemote, RegistrationPatch};
use crate::modules::events::application::errors::StoreError;
use crate::modules::events::application::remote_event_store::RemoteEventStore;
use crate::modules::events::core::event_record::EventRecord;
use std::sync::Arc;
use tracing::info;

pub struct RegisterForEventHandler<TRemote>
where
    TRemote: EventsRemote + ?Sized + 'static,
{
    store: Arc<RemoteEventStore<TRemote>>,
}

impl<TRemote> RegisterForEventHandler<TRemote>
where
    TRemote: EventsRemote + ?Sized + 'static,
{
    pub fn new(store: Arc<RemoteEventStore<TRemote>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: &str) -> Result<EventRecord, StoreError> {
        let record = self.store.update(id, RegistrationPatch::register()).await?;
        info!(%id, "registered for event");
        Ok(record)
    }
}
