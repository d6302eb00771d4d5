// Validation of event details before they are submitted to the remote source.
//
// Purpose
// - Reject malformed input early so create never sends a record that breaks domain constraints.
//
// Responsibilities
// - Check every rule and report all failures at once, in field order.
// - Never perform input or output. The current time is passed in.

use crate::modules::events::core::event_record::EventDetails;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("a valid email is required")]
    InvalidEmail,
    #[error("phone number must be exactly 10 digits")]
    InvalidPhoneNumber,
    #[error("start time must be in the future")]
    StartNotInFuture,
    #[error("end time must be after start time")]
    EndNotAfterStart,
    #[error("a valid http(s) video url is required")]
    InvalidVideoUrl,
    #[error("zip code must contain digits only")]
    InvalidZipCode,
    #[error("latitude and longitude are required")]
    MissingCoordinates,
    #[error("latitude must be within -90..=90 and longitude within -180..=180")]
    CoordinatesOutOfRange,
    #[error("ticket price must be a non-negative number")]
    InvalidTicketPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    messages.join("; ")
}

impl EventDetails {
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        let required = [
            ("event name", &self.name),
            ("tagline", &self.tagline),
            ("organizer", &self.organizer),
            ("organizer details", &self.organizer_details),
            ("venue address 1", &self.venue.address1),
            ("city", &self.venue.city),
            ("state", &self.venue.state),
            ("country", &self.venue.country),
            ("description", &self.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(ValidationError::Required(field));
            }
        }
        if self.speakers().is_empty() {
            errors.push(ValidationError::Required("speaker"));
        }

        if !is_email(&self.email) {
            errors.push(ValidationError::InvalidEmail);
        }
        if self.phone_number.len() != 10 || !self.phone_number.bytes().all(|b| b.is_ascii_digit()) {
            errors.push(ValidationError::InvalidPhoneNumber);
        }
        if self.start_time <= now {
            errors.push(ValidationError::StartNotInFuture);
        }
        if self.end_time <= self.start_time {
            errors.push(ValidationError::EndNotAfterStart);
        }
        if !is_video_url(&self.video_url) {
            errors.push(ValidationError::InvalidVideoUrl);
        }
        if self.venue.zip_code.is_empty() || !self.venue.zip_code.bytes().all(|b| b.is_ascii_digit()) {
            errors.push(ValidationError::InvalidZipCode);
        }
        match self.venue.coordinates() {
            None => errors.push(ValidationError::MissingCoordinates),
            Some(c) if !(c.lat.is_finite() && c.long.is_finite()) => {
                errors.push(ValidationError::CoordinatesOutOfRange)
            }
            Some(c) if c.lat.abs() > 90.0 || c.long.abs() > 180.0 => {
                errors.push(ValidationError::CoordinatesOutOfRange)
            }
            Some(_) => {}
        }
        if !self.ticket_price.is_finite() || self.ticket_price < 0.0 {
            errors.push(ValidationError::InvalidTicketPrice);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

fn is_video_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| host.contains('.'))
        }
        Err(_) => false,
    }
}
