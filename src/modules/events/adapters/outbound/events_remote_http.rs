// HTTP implementation of the EventsRemote port.
//
// Purpose
// - Talk to the events API: GET /events, POST /events, PATCH /events/{id}.
//
// Responsibilities
// - Map transport failures to Unavailable, non-2xx answers to Status and bad bodies to Decode.
// - Apply the configured request timeout to every call.

use crate::modules::events::adapters::outbound::events_remote::{
    EventsRemote, RegistrationPatch, RemoteError,
};
use crate::modules::events::core::event_record::{EventDetails, EventRecord};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub struct HttpEventsRemote {
    client: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct NewEventBody<'a> {
    #[serde(flatten)]
    details: &'a EventDetails,
    #[serde(rename = "isRegistered")]
    is_registered: bool,
}

impl HttpEventsRemote {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, RemoteError> {
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::Unavailable(format!(
                "events api url {base_url} cannot carry a path"
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;
        Ok(Self { client, base_url })
    }

    fn events_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base urls are rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("events");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }
}

fn transport_error(err: reqwest::Error) -> RemoteError {
    RemoteError::Unavailable(err.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(RemoteError::Status {
            status: status.as_u16(),
            message,
        });
    }
    let body = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&body).map_err(|e| RemoteError::Decode(e.to_string()))
}

#[async_trait::async_trait]
impl EventsRemote for HttpEventsRemote {
    async fn list(&self) -> Result<Vec<EventRecord>, RemoteError> {
        let response = self
            .client
            .get(self.events_url(None))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn create(&self, details: &EventDetails) -> Result<EventRecord, RemoteError> {
        let body = NewEventBody {
            details,
            is_registered: false,
        };
        let response = self
            .client
            .post(self.events_url(None))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn patch(&self, id: &str, patch: RegistrationPatch) -> Result<EventRecord, RemoteError> {
        let response = self
            .client
            .patch(self.events_url(Some(id)))
            .json(&patch)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }
}
