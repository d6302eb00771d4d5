use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::events::application::errors::StoreError;
use crate::modules::events::core::event_record::EventDetails;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CreateEventErrorResponse {
    pub errors: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EventDetails>, JsonRejection>,
) -> impl IntoResponse {
    let Json(details) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.store.create(details).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(StoreError::Validation(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(CreateEventErrorResponse {
                errors: errors.errors().iter().map(ToString::to_string).collect(),
            }),
        )
            .into_response(),
        Err(err @ StoreError::Network(_)) => (
            StatusCode::BAD_GATEWAY,
            Json(CreateEventErrorResponse {
                errors: vec![err.to_string()],
            }),
        )
            .into_response(),
    }
}
