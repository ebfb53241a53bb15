//! HTTP client for the conference management backend
//!
//! Thin REST wrapper: one method per endpoint, JSON in and out. Non-2xx
//! responses carry a `{"error": "..."}` body which is surfaced verbatim;
//! anything else falls back to a status-code message.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{ApiError, ConferenceApi, SavedConference};
use crate::state::Conference;

/// Default backend address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:5000";

/// Client for the Confero REST backend
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client against the configured address. The
    /// `CONFERO_API_ADDRESS` environment variable wins over the config
    /// file, which wins over the default.
    pub fn new(configured: Option<String>) -> Self {
        let base_url = std::env::var("CONFERO_API_ADDRESS")
            .ok()
            .or(configured)
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

#[derive(Deserialize)]
struct ConferencesResponse {
    conferences: Vec<Conference>,
}

#[derive(Deserialize)]
struct ConferenceResponse {
    conference: Conference,
}

#[derive(Deserialize)]
struct ConferenceCreated {
    conference_id: String,
}

#[derive(Deserialize)]
struct TrackCreated {
    track_id: String,
}

/// Turn a non-2xx response into an `ApiError`, preferring the backend's
/// own error message.
async fn backend_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) if !body.error.is_empty() => ApiError::Backend(body.error),
        _ => ApiError::Backend(format!("request failed with status {status}")),
    }
}

#[async_trait]
impl ConferenceApi for HttpApiClient {
    async fn list_conferences(&self) -> Result<Vec<Conference>, ApiError> {
        let response = self.http.get(self.url("/conference/")).send().await?;
        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }
        let body: ConferencesResponse = response.json().await?;
        Ok(body.conferences)
    }

    async fn fetch_conference(&self, id: &str) -> Result<SavedConference, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/conference/{id}")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }
        let body: ConferenceResponse = response.json().await?;
        Ok(SavedConference::new(body.conference))
    }

    async fn create_conference(&self, payload: Map<String, Value>) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url("/conference/create"))
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }
        let body: ConferenceCreated = response.json().await?;
        tracing::info!(id = %body.conference_id, "conference created");
        Ok(body.conference_id)
    }

    async fn update_conference(
        &self,
        id: &str,
        payload: Map<String, Value>,
    ) -> Result<SavedConference, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/conference/{id}")))
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }
        let body: ConferenceResponse = response.json().await?;
        tracing::info!(id = %id, "conference updated");
        Ok(SavedConference::new(body.conference))
    }

    async fn create_track(&self, payload: Map<String, Value>) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url("/track/create"))
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }
        let body: TrackCreated = response.json().await?;
        tracing::info!(id = %body.track_id, "track created");
        Ok(body.track_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpApiClient {
            http: reqwest::Client::new(),
            base_url: "http://localhost:5000/".to_string(),
        };
        assert_eq!(
            client.url("/conference/create"),
            "http://localhost:5000/conference/create"
        );
    }

    #[test]
    fn test_backend_error_message_is_displayed_verbatim() {
        let err = ApiError::Backend("Name already exists".to_string());
        assert_eq!(err.to_string(), "Name already exists");
    }
}
