// App state wired to an in-memory remote, for inbound HTTP and end-to-end tests.

use crate::modules::events::adapters::outbound::events_remote_in_memory::InMemoryEventsRemote;
use crate::modules::events::core::event_record::EventRecord;
use crate::modules::events::core::window::DEFAULT_INCREMENT;
use crate::shell::state::AppState;
use axum::body::Body;
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;

pub fn make_state(records: Vec<EventRecord>) -> (Arc<InMemoryEventsRemote>, AppState) {
    let remote = Arc::new(InMemoryEventsRemote::with_records(records));
    let state = AppState::new(remote.clone(), DEFAULT_INCREMENT);
    (remote, state)
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
