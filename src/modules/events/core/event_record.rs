// Event record: the domain entity held in the canonical collection.
//
// Purpose
// - Describe an event as the remote source stores it, and the id-less shape submitted on create.
//
// Responsibilities
// - EventDetails carries every descriptive, temporal, commercial and location field.
// - EventRecord adds the remote-assigned id and the registration flag.
// - Keep the JSON field names of the remote source so records round-trip through the transport.
//
// Notes
// - A missing coordinate is None. Zero is a valid latitude or longitude.
// - Category is a closed set. Unknown values fail to deserialize.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type EventId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Conference,
    Festival,
    Playground,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Conference, Category::Festival, Category::Playground];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Conference => "Conference",
            Category::Festival => "Festival",
            Category::Playground => "Playground",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub country: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
}

impl Venue {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.long) {
            (Some(lat), Some(long)) => Some(Coordinates { lat, long }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    #[serde(rename = "event_name")]
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub phone_number: String,
    #[serde(rename = "start_date_time")]
    pub start_time: DateTime<FixedOffset>,
    #[serde(rename = "end_date_time")]
    pub end_time: DateTime<FixedOffset>,
    pub organizer: String,
    pub organizer_details: String,
    pub speaker: String,
    pub video_url: String,
    pub venue: Venue,
    pub short_description: String,
    pub image_folder_path: String,
    pub ticket_price: f64,
    pub description: String,
    pub category: Category,
}

impl EventDetails {
    /// Speakers are stored comma separated.
    pub fn speakers(&self) -> Vec<&str> {
        self.speaker
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    #[serde(flatten)]
    pub details: EventDetails,
    #[serde(rename = "isRegistered", default)]
    pub is_registered: bool,
}

impl EventRecord {
    pub fn new(id: impl Into<EventId>, details: EventDetails) -> Self {
        Self {
            id: id.into(),
            details,
            is_registered: false,
        }
    }
}
