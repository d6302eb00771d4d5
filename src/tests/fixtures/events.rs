// Shared event fixtures: a JSON-backed details builder and small record factories.

use crate::modules::events::core::event_record::{Category, EventDetails, EventRecord};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::fs;

pub struct EventDetailsBuilder {
    inner: EventDetails,
}

impl Default for EventDetailsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventDetailsBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/event_details.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn tagline(mut self, v: impl Into<String>) -> Self {
        self.inner.tagline = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn phone_number(mut self, v: impl Into<String>) -> Self {
        self.inner.phone_number = v.into();
        self
    }

    pub fn speaker(mut self, v: impl Into<String>) -> Self {
        self.inner.speaker = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn city(mut self, v: impl Into<String>) -> Self {
        self.inner.venue.city = v.into();
        self
    }

    pub fn zip_code(mut self, v: impl Into<String>) -> Self {
        self.inner.venue.zip_code = v.into();
        self
    }

    pub fn coordinates(mut self, lat: Option<f64>, long: Option<f64>) -> Self {
        self.inner.venue.lat = lat;
        self.inner.venue.long = long;
        self
    }

    pub fn start_time(mut self, v: DateTime<FixedOffset>) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: DateTime<FixedOffset>) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn ticket_price(mut self, v: f64) -> Self {
        self.inner.ticket_price = v;
        self
    }

    pub fn category(mut self, v: Category) -> Self {
        self.inner.category = v;
        self
    }

    pub fn build(self) -> EventDetails {
        self.inner
    }
}

/// Reference "now" for validation, well before the fixture start time.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap()
}

pub fn make_record(id: &str, name: &str, category: Category, ticket_price: f64) -> EventRecord {
    EventRecord::new(
        id,
        EventDetailsBuilder::new()
            .name(name)
            .category(category)
            .ticket_price(ticket_price)
            .build(),
    )
}

/// `count` records with ids ev-0.., categories cycling Conference, Festival, Playground.
pub fn make_collection(count: usize) -> Vec<EventRecord> {
    (0..count)
        .map(|i| {
            make_record(
                &format!("ev-{i}"),
                &format!("Event {i}"),
                Category::ALL[i % Category::ALL.len()],
                (i % 7) as f64 * 10.0,
            )
        })
        .collect()
}

#[cfg(test)]
mod event_details_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EventDetailsBuilder::default().build();
        assert_eq!(built.name, "RustConf Amsterdam");
        assert_eq!(built.category, Category::Conference);
        assert_eq!(built.ticket_price, 25.0);
        assert_eq!(built.venue.zip_code, "1019");
        assert!(built.end_time > built.start_time);
    }

    #[rstest]
    fn it_should_make_a_collection_with_cycling_categories() {
        let collection = make_collection(4);
        assert_eq!(collection.len(), 4);
        assert_eq!(collection[0].details.category, Category::Conference);
        assert_eq!(collection[1].details.category, Category::Festival);
        assert_eq!(collection[3].details.category, Category::Conference);
        assert_eq!(collection[2].id, "ev-2");
    }
}
