// Test remote whose list calls resolve when the test says so.
//
// Each script_list() queues one pending list result. The n-th list call waits on the
// n-th scripted result, which makes out-of-order resolution deterministic.

use crate::modules::events::adapters::outbound::events_remote::{
    EventsRemote, RegistrationPatch, RemoteError,
};
use crate::modules::events::core::event_record::{EventDetails, EventRecord};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::oneshot;

type ListResult = Result<Vec<EventRecord>, RemoteError>;

#[derive(Default)]
pub struct ScriptedEventsRemote {
    lists: Mutex<VecDeque<oneshot::Receiver<ListResult>>>,
    created: Mutex<usize>,
}

impl ScriptedEventsRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_list(&self) -> oneshot::Sender<ListResult> {
        let (tx, rx) = oneshot::channel();
        self.lists.lock().unwrap().push_back(rx);
        tx
    }
}

#[async_trait::async_trait]
impl EventsRemote for ScriptedEventsRemote {
    async fn list(&self) -> ListResult {
        let next = self.lists.lock().unwrap().pop_front();
        match next {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(RemoteError::Unavailable("script dropped".into()))),
            None => Err(RemoteError::Unavailable("no scripted list result".into())),
        }
    }

    async fn create(&self, details: &EventDetails) -> Result<EventRecord, RemoteError> {
        let mut created = self.created.lock().unwrap();
        *created += 1;
        Ok(EventRecord::new(format!("ev-scripted-{created}"), details.clone()))
    }

    async fn patch(&self, id: &str, _patch: RegistrationPatch) -> Result<EventRecord, RemoteError> {
        Err(RemoteError::Status {
            status: 404,
            message: format!("event {id} not scripted"),
        })
    }
}
