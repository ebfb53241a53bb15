//! REST API client module for backend communication

mod client;
mod traits;

pub use client::HttpApiClient;
pub use traits::ConferenceApi;

#[cfg(test)]
pub use traits::MockConferenceApi;

use crate::state::Conference;

/// Errors from the backend gateway.
///
/// `Backend` carries the `{error}` message from a non-2xx response body (or
/// a status fallback when the body is unusable); `Transport` is everything
/// below HTTP semantics.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Backend(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A conference the backend has confirmed persisted.
///
/// Only the API client's success paths can mint one, which makes it the
/// sole write token for [`crate::state::ActiveConferenceStore`]: views read
/// the active conference freely, but writing requires having actually gone
/// through the gateway.
pub struct SavedConference(Conference);

impl SavedConference {
    pub(in crate::api) fn new(conference: Conference) -> Self {
        Self(conference)
    }

    #[cfg(test)]
    pub fn test_new(conference: Conference) -> Self {
        Self(conference)
    }

    pub fn into_conference(self) -> Conference {
        self.0
    }
}
