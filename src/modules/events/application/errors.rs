use crate::modules::events::adapters::outbound::events_remote::RemoteError;
use crate::modules::events::core::validation::ValidationErrors;
use thiserror::Error;

/// Failure of a create or update call, surfaced to the caller as a transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Network(#[from] RemoteError),

    #[error("event rejected: {0}")]
    Validation(#[from] ValidationErrors),
}
