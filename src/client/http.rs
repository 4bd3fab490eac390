//! HTTP client implementation.
//!
//! Provides the main HTTP client for interacting with the Kinescope Live
//! Events API.

use chrono::{DateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::config::ClientConfig;
use super::error::{self, ClientError};
use crate::types::{CreateEventRequest, Event, Patch, Record, Stream, UpdateEventRequest};

/// Success envelope. Every successful JSON response nests its payload
/// under a single `data` field.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Request body for scheduling a stream start time.
#[derive(Debug, Serialize)]
struct ScheduleStreamRequest {
    started_at: DateTime<Utc>,
}

/// HTTP client for the Kinescope Live Events API.
///
/// The client is cheap to clone and safe to share across tasks: per-request
/// state is call-local and the underlying connection pool handles its own
/// synchronization.
#[derive(Debug, Clone)]
pub struct KinescopeClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl KinescopeClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if !config.user_agent.is_empty() {
            builder = builder.user_agent(&config.user_agent);
        }
        let http = builder.build().map_err(ClientError::Request)?;

        Ok(Self { config, http })
    }

    /// Creates a new client with the given API token and default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_token(api_token: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(api_token))
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves the full request URL from the configured base URL and the
    /// given path segments. Each segment is percent-encoded, so a
    /// caller-supplied identifier cannot alter the path structure.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ClientError::InvalidConfig(format!("invalid base_url: {}", e)))?;
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                ClientError::InvalidConfig("base_url cannot be a base".to_string())
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// Performs one request/response cycle and returns the raw success body.
    ///
    /// Serializes the input (if any), resolves the URL, attaches headers,
    /// executes the request, reads the full body, and normalizes non-success
    /// statuses into an error. Decoding is left to the caller so that
    /// operations without an output skip it entirely.
    async fn execute<B>(
        &self,
        method: Method,
        segments: &[&str],
        input: Option<&B>,
    ) -> Result<Vec<u8>, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let payload = match input {
            Some(value) => Some(
                serde_json::to_vec(value)
                    .map_err(|e| ClientError::Serialization(e.to_string()))?,
            ),
            None => None,
        };

        let url = self.endpoint(segments)?;
        tracing::debug!(method = %method, path = url.path(), "dispatching API request");

        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(&self.config.api_token);
        if let Some(body) = payload {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(ClientError::from)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::from)?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "API returned error status");
            return Err(error::normalize(status, &body));
        }

        Ok(body.to_vec())
    }

    /// Performs a request whose response must carry an enveloped payload.
    async fn request<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        input: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.execute(method, segments, input).await?;
        if body.is_empty() {
            return Err(ClientError::Deserialization(
                "response body is empty".to_string(),
            ));
        }

        let envelope: Envelope<T> = serde_json::from_slice(&body)
            .map_err(|e| ClientError::Deserialization(e.to_string()))?;
        Ok(envelope.data)
    }

    /// Performs a request and ignores the response body without decoding it.
    async fn request_no_content(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<(), ClientError> {
        self.execute(method, segments, None::<&()>).await.map(|_| ())
    }

    /// Creates a live event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<Event, ClientError> {
        self.request(Method::POST, &["v2", "live", "events"], Some(request))
            .await
    }

    /// Updates a live event. Unset fields keep their current values.
    ///
    /// # Arguments
    ///
    /// * `event_id` - The event ID
    /// * `request` - The fields to change
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the event is not found.
    pub async fn update_event(
        &self,
        event_id: &str,
        request: &UpdateEventRequest,
    ) -> Result<Event, ClientError> {
        self.request(Method::PUT, &["v2", "live", "events", event_id], Some(request))
            .await
    }

    /// Gets a live event by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the event is not found.
    pub async fn get_event(&self, event_id: &str) -> Result<Event, ClientError> {
        self.request(Method::GET, &["v2", "live", "events", event_id], None::<&()>)
            .await
    }

    /// Enables a live event so it can accept an ingest.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn enable_event(&self, event_id: &str) -> Result<(), ClientError> {
        self.request_no_content(Method::PUT, &["v2", "live", "events", event_id, "enable"])
            .await
    }

    /// Finishes a live event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn finish_event(&self, event_id: &str) -> Result<(), ClientError> {
        self.request_no_content(Method::PUT, &["v2", "live", "events", event_id, "complete"])
            .await
    }

    /// Deletes a live event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_event(&self, event_id: &str) -> Result<(), ClientError> {
        self.request_no_content(Method::DELETE, &["v2", "live", "events", event_id])
            .await
    }

    /// Schedules a stream start time for an event.
    ///
    /// # Arguments
    ///
    /// * `event_id` - The event ID
    /// * `start` - When the stream should start
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn schedule_stream(
        &self,
        event_id: &str,
        start: DateTime<Utc>,
    ) -> Result<Stream, ClientError> {
        let body = ScheduleStreamRequest { started_at: start };
        self.request(
            Method::POST,
            &["v2", "live", "events", event_id, "stream"],
            Some(&body),
        )
        .await
    }

    /// Updates the scheduled start time of an event's stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_scheduled_stream(
        &self,
        event_id: &str,
        start: DateTime<Utc>,
    ) -> Result<Stream, ClientError> {
        let body = ScheduleStreamRequest { started_at: start };
        self.request(
            Method::PUT,
            &["v2", "live", "events", event_id, "stream"],
            Some(&body),
        )
        .await
    }

    /// Enables recording for an event, saving into the given folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn enable_recording(
        &self,
        event_id: &str,
        folder_id: &str,
    ) -> Result<Event, ClientError> {
        let request = UpdateEventRequest {
            record: Patch::Value(Record {
                parent_id: folder_id.to_string(),
            }),
            ..UpdateEventRequest::default()
        };
        self.update_event(event_id, &request).await
    }

    /// Disables recording for an event by clearing its recording
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn disable_recording(&self, event_id: &str) -> Result<Event, ClientError> {
        let request = UpdateEventRequest {
            record: Patch::Null,
            ..UpdateEventRequest::default()
        };
        self.update_event(event_id, &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let config = ClientConfig::new("sk_live_token");
        let client = KinescopeClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_token() {
        let client = KinescopeClient::with_token("sk_live_token");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_invalid_config() {
        let config = ClientConfig::new("");
        let client = KinescopeClient::new(config);
        assert!(client.is_err());
    }

    #[test]
    fn test_client_config_access() {
        let config = ClientConfig::new("sk_live_token").with_base_url("https://api.example.com");
        let client = KinescopeClient::new(config).expect("client creation");
        assert_eq!(client.config().base_url, "https://api.example.com");
        assert_eq!(client.config().api_token, "sk_live_token");
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = KinescopeClient::with_token("sk_live_token").expect("client creation");
        let url = client
            .endpoint(&["v2", "live", "events"])
            .expect("endpoint");
        assert_eq!(url.as_str(), "https://api.kinescope.io/v2/live/events");
    }

    #[test]
    fn test_endpoint_trailing_slash_base() {
        let config = ClientConfig::new("sk_live_token").with_base_url("https://api.example.com/");
        let client = KinescopeClient::new(config).expect("client creation");
        let url = client
            .endpoint(&["v2", "live", "events", "ev_1"])
            .expect("endpoint");
        assert_eq!(url.as_str(), "https://api.example.com/v2/live/events/ev_1");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = KinescopeClient::with_token("sk_live_token").expect("client creation");
        let url = client
            .endpoint(&["v2", "live", "events", "ev/../admin"])
            .expect("endpoint");
        assert_eq!(
            url.path(),
            "/v2/live/events/ev%2F..%2Fadmin"
        );
    }
}
