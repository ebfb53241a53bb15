//! Process-wide active conference cache
//!
//! Every view reads the active conference through this store; the only way
//! to write it is with a [`SavedConference`], which the API client mints on
//! its success paths. That keeps the single-writer contract in the type
//! system rather than in convention.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::api::SavedConference;
use crate::state::Conference;

pub struct ActiveConferenceStore {
    current: Option<Conference>,
    cache_path: Option<PathBuf>,
}

impl ActiveConferenceStore {
    /// Restore the active conference from the on-disk cache, if any.
    pub fn load() -> Self {
        let cache_path = Self::cache_path();
        let current = cache_path
            .as_deref()
            .filter(|p| p.exists())
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|content| serde_json::from_str(&content).ok());
        Self {
            current,
            cache_path,
        }
    }

    /// Store without disk persistence, for tests.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            current: None,
            cache_path: None,
        }
    }

    fn cache_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "confero", "confero-tui")
            .map(|dirs| dirs.cache_dir().join("active_conference.json"))
    }

    pub fn get(&self) -> Option<&Conference> {
        self.current.as_ref()
    }

    pub fn id(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.id.as_str())
    }

    /// Replace the active conference. Persistence is best effort; a cache
    /// write failure only loses the selection across restarts.
    pub fn set(&mut self, saved: SavedConference) {
        let conference = saved.into_conference();
        if let Some(path) = &self.cache_path {
            if let Err(err) = self.persist(path.clone(), &conference) {
                tracing::warn!("failed to cache active conference: {err}");
            }
        }
        tracing::debug!(id = %conference.id, "active conference set");
        self.current = Some(conference);
    }

    fn persist(&self, path: PathBuf, conference: &Conference) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(conference)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::sample_conference;

    #[test]
    fn test_starts_empty_in_memory() {
        let store = ActiveConferenceStore::in_memory();
        assert!(store.get().is_none());
        assert!(store.id().is_none());
    }

    #[test]
    fn test_set_replaces_current() {
        let mut store = ActiveConferenceStore::in_memory();
        store.set(SavedConference::test_new(sample_conference("abc")));
        assert_eq!(store.id(), Some("abc"));

        store.set(SavedConference::test_new(sample_conference("def")));
        assert_eq!(store.id(), Some("def"));
    }
}
