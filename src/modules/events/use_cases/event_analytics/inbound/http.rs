use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::criteria::CategoryFilter;
use crate::modules::events::use_cases::event_analytics::report::{
    AnalyticsCriteria, AnalyticsRow, MonthCount, analytics_rows, monthly_counts,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AnalyticsParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyticsResponse {
    pub year: i32,
    pub monthly: Vec<MonthCount>,
    pub rows: Vec<AnalyticsRow>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<AnalyticsParams>,
) -> impl IntoResponse {
    let now = Utc::now();
    let category = match params.category.as_deref() {
        None | Some("") => CategoryFilter::All,
        Some(raw) => match raw.parse::<CategoryFilter>() {
            Ok(filter) => filter,
            Err(_) => return StatusCode::BAD_REQUEST.into_response(),
        },
    };
    if params.month.is_some_and(|m| !(1..=12).contains(&m)) {
        return StatusCode::BAD_REQUEST.into_response();
    }
    let criteria = AnalyticsCriteria {
        year: params.year.unwrap_or_else(|| now.year()),
        month: params.month,
        search: params.search.unwrap_or_default(),
        category,
    };

    let events = state.store.events();
    Json(AnalyticsResponse {
        year: criteria.year,
        monthly: monthly_counts(&events, criteria.year),
        rows: analytics_rows(&events, &criteria, now),
    })
    .into_response()
}
