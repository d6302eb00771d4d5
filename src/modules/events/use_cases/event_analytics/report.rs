// Analytics over the canonical collection: events per month and a filtered table.
//
// Purpose
// - Count events per month for a year and project the filtered set into table rows.
//
// Boundaries
// - Pure. The current time is passed in to decide whether an event is upcoming.
// - Dates are evaluated in each event's own UTC offset.

use crate::modules::events::core::criteria::CategoryFilter;
use crate::modules::events::core::event_record::{Category, EventId, EventRecord};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: u32,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventPhase {
    Upcoming,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AnalyticsCriteria {
    pub year: i32,
    pub month: Option<u32>,
    pub search: String,
    pub category: CategoryFilter,
}

impl AnalyticsCriteria {
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    fn accepts(&self, record: &EventRecord) -> bool {
        let start = record.details.start_time;
        if start.year() != self.year {
            return false;
        }
        if self.month.is_some_and(|month| start.month() != month) {
            return false;
        }
        if !self.search.is_empty() {
            let term = self.search.to_lowercase();
            let details = &record.details;
            let hit = [&details.description, &details.name, &details.venue.city]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        self.category.accepts(record.details.category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsRow {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub organizer: String,
    pub category: Category,
    pub phase: EventPhase,
}

pub fn phase(record: &EventRecord, now: DateTime<Utc>) -> EventPhase {
    if record.details.start_time > now {
        EventPhase::Upcoming
    } else {
        EventPhase::Completed
    }
}

pub fn monthly_counts(events: &[EventRecord], year: i32) -> Vec<MonthCount> {
    let mut counts: Vec<MonthCount> = (1..=12).map(|month| MonthCount { month, count: 0 }).collect();
    for record in events.iter().filter(|r| r.details.start_time.year() == year) {
        let index = record.details.start_time.month0() as usize;
        counts[index].count += 1;
    }
    counts
}

pub fn analytics_rows(
    events: &[EventRecord],
    criteria: &AnalyticsCriteria,
    now: DateTime<Utc>,
) -> Vec<AnalyticsRow> {
    events
        .iter()
        .filter(|record| criteria.accepts(record))
        .map(|record| AnalyticsRow {
            id: record.id.clone(),
            title: record.details.name.clone(),
            description: record.details.description.clone(),
            date: record.details.start_time.format("%m/%d/%Y").to_string(),
            location: record.details.venue.city.clone(),
            organizer: record.details.organizer.clone(),
            category: record.details.category,
            phase: phase(record, now),
        })
        .collect()
}
