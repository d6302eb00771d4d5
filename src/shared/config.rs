// Runtime configuration read from the environment.
//
// Responsibilities
// - Provide defaults for every setting and override them from environment variables.
// - Reject values that do not parse, naming the offending variable.
//
// Boundaries
// - Loading a `.env` file is left to the binary. Parsing goes through a lookup
//   function so it can be exercised without touching the process environment.

use crate::modules::events::core::window::DEFAULT_INCREMENT;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const BIND_VAR: &str = "EVENT_CATALOG_BIND";
pub const API_URL_VAR: &str = "EVENTS_API_URL";
pub const API_TIMEOUT_VAR: &str = "EVENTS_API_TIMEOUT_MS";
pub const PAGE_INCREMENT_VAR: &str = "EVENT_PAGE_INCREMENT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an invalid value `{value}`: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: SocketAddr,
    /// Base URL of the events API. `None` runs against the in-memory remote.
    pub api_url: Option<Url>,
    pub api_timeout: Duration,
    pub page_increment: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            api_url: None,
            api_timeout: Duration::from_millis(10_000),
            page_increment: DEFAULT_INCREMENT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |var: &'static str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(value) = read(BIND_VAR) {
            config.bind = value.parse().map_err(|e: std::net::AddrParseError| {
                invalid(BIND_VAR, &value, e.to_string())
            })?;
        }
        if let Some(value) = read(API_URL_VAR) {
            config.api_url = Some(
                Url::parse(&value).map_err(|e| invalid(API_URL_VAR, &value, e.to_string()))?,
            );
        }
        if let Some(value) = read(API_TIMEOUT_VAR) {
            let millis: u64 = value.parse().map_err(|e: std::num::ParseIntError| {
                invalid(API_TIMEOUT_VAR, &value, e.to_string())
            })?;
            config.api_timeout = Duration::from_millis(millis);
        }
        if let Some(value) = read(PAGE_INCREMENT_VAR) {
            let increment: usize = value.parse().map_err(|e: std::num::ParseIntError| {
                invalid(PAGE_INCREMENT_VAR, &value, e.to_string())
            })?;
            if increment == 0 {
                return Err(invalid(PAGE_INCREMENT_VAR, &value, "must be at least 1".into()));
            }
            config.page_increment = increment;
        }
        Ok(config)
    }
}

fn invalid(var: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason,
    }
}
