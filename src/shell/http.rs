use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::events::use_cases::browse_events::inbound::http as browse_http;
use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::event_analytics::inbound::http as analytics_http;
use crate::modules::events::use_cases::fetch_events::inbound::http as fetch_http;
use crate::modules::events::use_cases::register_for_event::inbound::http as register_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(fetch_http::status))
        .route("/refresh", post(fetch_http::refresh))
        .route("/window", get(browse_http::window))
        .route("/window/visible", post(browse_http::last_item_visible))
        .route("/criteria", put(browse_http::set_criteria))
        .route("/events", post(create_http::handle))
        .route("/events/{id}", get(browse_http::show))
        .route("/events/{id}/register", post(register_http::handle))
        .route("/analytics", get(analytics_http::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
