use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::events::adapters::outbound::events_remote::RemoteError;
use crate::modules::events::application::errors::StoreError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct RegisterErrorResponse {
    pub error: String,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.register_handler.handle(&id).await {
        Ok(record) => Json(record).into_response(),
        Err(err) => {
            let status = match &err {
                StoreError::Network(RemoteError::Status { status: 404, .. }) => StatusCode::NOT_FOUND,
                StoreError::Network(_) => StatusCode::BAD_GATEWAY,
                StoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            };
            (
                status,
                Json(RegisterErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
