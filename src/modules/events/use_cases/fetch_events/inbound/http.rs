use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::modules::events::application::remote_event_store::{FetchStatus, StoreSnapshot};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct FetchStatusResponse {
    pub status: FetchStatus,
    pub error: Option<String>,
    pub count: usize,
    pub integrity_warnings: Vec<String>,
}

impl From<StoreSnapshot> for FetchStatusResponse {
    fn from(snapshot: StoreSnapshot) -> Self {
        Self {
            status: snapshot.status,
            error: snapshot.error,
            count: snapshot.events.len(),
            integrity_warnings: snapshot
                .integrity_warnings
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(FetchStatusResponse::from(state.store.snapshot()))
}

/// Run a fetch to completion. A failed fetch still answers 200, with the failed status.
pub async fn refresh(State(state): State<AppState>) -> impl IntoResponse {
    state.store.fetch().await;
    Json(FetchStatusResponse::from(state.store.snapshot()))
}
