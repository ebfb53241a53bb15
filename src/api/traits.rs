//! Trait abstraction for the backend API client to enable mocking in tests

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{ApiError, SavedConference};
use crate::state::Conference;

/// Gateway to the conference management backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConferenceApi: Send + Sync {
    /// List all conferences.
    async fn list_conferences(&self) -> Result<Vec<Conference>, ApiError>;

    /// Fetch a conference by id.
    async fn fetch_conference(&self, id: &str) -> Result<SavedConference, ApiError>;

    /// Create a conference from a flattened wizard payload; returns the new
    /// conference id.
    async fn create_conference(&self, payload: Map<String, Value>) -> Result<String, ApiError>;

    /// Update a conference; returns the updated entity.
    async fn update_conference(
        &self,
        id: &str,
        payload: Map<String, Value>,
    ) -> Result<SavedConference, ApiError>;

    /// Create a track under a conference; returns the new track id.
    async fn create_track(&self, payload: Map<String, Value>) -> Result<String, ApiError>;
}
