// Port to the remote events source.
//
// Purpose
// - Describe the three remote calls the store needs: list, create and patch.
//
// Boundaries
// - No concrete transport here. In memory and HTTP implementations live next to this file.
// - Every call resolves exactly once, with the full record(s) or a RemoteError.

use crate::modules::events::core::event_record::{EventDetails, EventRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("remote unavailable: {0}")]
    Unavailable(String),

    #[error("remote answered {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed remote payload: {0}")]
    Decode(String),
}

/// Partial mutation sent on PATCH. Only the registration flag is mutable from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPatch {
    #[serde(rename = "isRegistered")]
    pub is_registered: bool,
}

impl RegistrationPatch {
    pub fn register() -> Self {
        Self { is_registered: true }
    }
}

#[async_trait]
pub trait EventsRemote: Send + Sync {
    async fn list(&self) -> Result<Vec<EventRecord>, RemoteError>;
    async fn create(&self, details: &EventDetails) -> Result<EventRecord, RemoteError>;
    async fn patch(&self, id: &str, patch: RegistrationPatch) -> Result<EventRecord, RemoteError>;
}
