use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::events::core::criteria::FilterCriteria;
use crate::modules::events::core::event_record::EventRecord;
use crate::modules::events::use_cases::browse_events::browser::EventBrowser;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct WindowResponse {
    pub criteria: FilterCriteria,
    pub events: Vec<EventRecord>,
    pub revealed: usize,
    pub view_len: usize,
    pub has_more: bool,
}

impl From<&EventBrowser> for WindowResponse {
    fn from(browser: &EventBrowser) -> Self {
        Self {
            criteria: browser.criteria().clone(),
            events: browser.window().to_vec(),
            revealed: browser.window().len(),
            view_len: browser.view_len(),
            has_more: browser.has_more(),
        }
    }
}

pub async fn window(State(state): State<AppState>) -> impl IntoResponse {
    let browser = state.synced_browser().await;
    Json(WindowResponse::from(&*browser))
}

pub async fn set_criteria(
    State(state): State<AppState>,
    body: Result<Json<FilterCriteria>, JsonRejection>,
) -> impl IntoResponse {
    let Json(criteria) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let mut browser = state.synced_browser().await;
    browser.set_criteria(criteria);
    Json(WindowResponse::from(&*browser)).into_response()
}

/// The presentation reports that the last revealed item became visible.
pub async fn last_item_visible(State(state): State<AppState>) -> impl IntoResponse {
    let mut browser = state.synced_browser().await;
    browser.on_last_item_visible();
    Json(WindowResponse::from(&*browser))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.store.find(&id) {
        Some(record) => Json(record).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
