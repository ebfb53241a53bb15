//! Application state and core logic

use crate::api::{ConferenceApi, HttpApiClient};
use crate::config::TuiConfig;
use crate::state::{ActiveConferenceStore, AppState, View};
use crate::wizard::{
    conference_create_wizard, conference_edit_wizard, track_create_wizard, FieldKind,
    PrimaryOutcome, WizardFlow,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Active conference store, written only by gateway success paths
    pub active: ActiveConferenceStore,
    /// Backend gateway
    api: Box<dyn ConferenceApi>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance and load the initial conference list
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load()?;
        let api: Box<dyn ConferenceApi> = Box::new(HttpApiClient::new(config.api_address));
        let mut app = Self {
            state: AppState::default(),
            active: ActiveConferenceStore::load(),
            api,
            quit: false,
        };
        app.refresh_conferences().await;
        Ok(app)
    }

    #[cfg(test)]
    fn with_api(api: Box<dyn ConferenceApi>) -> Self {
        Self {
            state: AppState::default(),
            active: ActiveConferenceStore::in_memory(),
            api,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Re-fetch the conference list and update the connection flag
    pub async fn refresh_conferences(&mut self) {
        match self.api.list_conferences().await {
            Ok(conferences) => {
                self.state.backend_connected = true;
                self.state.conferences = conferences;
                if self.state.selected_index >= self.state.conferences.len() {
                    self.state.reset_selection();
                }
            }
            Err(err) => {
                self.state.backend_connected = false;
                tracing::warn!("failed to list conferences: {err}");
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // An open error dialog swallows everything except dismissal.
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if self.state.confirm_cancel {
            match key.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    self.state.confirm_cancel = false;
                    self.close_wizard();
                }
                KeyCode::Esc | KeyCode::Char('n') => self.state.confirm_cancel = false,
                _ => {}
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Conferences => self.handle_conferences_key(key).await?,
            View::ConferenceDetail => self.handle_detail_key(key).await?,
            view if view.is_wizard() => self.handle_wizard_key(key).await?,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the conference list view
    async fn handle_conferences_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('r') => self.refresh_conferences().await,
            KeyCode::Char('n') => {
                self.state.status_message = None;
                self.state.wizard = Some(conference_create_wizard());
                self.state.current_view = View::ConferenceCreate;
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.state.conferences.len();
                self.state.move_selection_down(max);
            }
            KeyCode::Enter => self.select_conference().await,
            _ => {}
        }
        Ok(())
    }

    /// Make the highlighted conference the active one and open its detail view
    async fn select_conference(&mut self) {
        let Some(id) = self.state.selected_conference().map(|c| c.id.clone()) else {
            return;
        };
        match self.api.fetch_conference(&id).await {
            Ok(saved) => {
                self.active.set(saved);
                self.state.current_view = View::ConferenceDetail;
            }
            Err(err) => self.push_error(format!("Error: {err}")),
        }
    }

    /// Handle keys in the conference detail view
    async fn handle_detail_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.state.current_view = View::Conferences;
            }
            KeyCode::Char('e') => self.open_conference_edit().await,
            KeyCode::Char('t') => self.open_track_create(),
            KeyCode::Char('r') => self.refresh_active().await,
            _ => {}
        }
        Ok(())
    }

    async fn refresh_active(&mut self) {
        let Some(id) = self.active.id().map(str::to_string) else {
            return;
        };
        match self.api.fetch_conference(&id).await {
            Ok(saved) => self.active.set(saved),
            Err(err) => self.push_error(format!("Error: {err}")),
        }
    }

    /// Bootstrap the edit wizard from a fresh fetch of the active conference.
    /// A failed fetch is unrecoverable within the flow: the user is sent
    /// back to the conference list.
    async fn open_conference_edit(&mut self) {
        let Some(id) = self.active.id().map(str::to_string) else {
            self.push_error("No active conference selected");
            return;
        };
        self.state.loading = true;
        match self.api.fetch_conference(&id).await {
            Ok(saved) => {
                let conference = saved.into_conference();
                self.state.status_message = None;
                self.state.wizard = Some(conference_edit_wizard(&conference));
                self.state.current_view = View::ConferenceEdit;
            }
            Err(err) => {
                tracing::error!("failed to load conference for editing: {err}");
                self.push_error("Failed to load conference data. Returning to the conference list.");
                self.state.current_view = View::Conferences;
            }
        }
        self.state.loading = false;
    }

    fn open_track_create(&mut self) {
        if self.active.get().is_none() {
            self.push_error("No active conference selected");
            return;
        }
        self.state.status_message = None;
        self.state.wizard = Some(track_create_wizard());
        self.state.current_view = View::TrackCreate;
    }

    /// Handle keys inside a wizard view
    async fn handle_wizard_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.loading {
            return Ok(());
        }

        if key.code == KeyCode::Enter {
            let outcome = match self.state.wizard.as_mut() {
                Some(wizard) => wizard.primary(),
                None => return Ok(()),
            };
            if outcome == PrimaryOutcome::Submit {
                self.submit_wizard().await;
            }
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            let touched = self.state.wizard.as_ref().is_some_and(|w| w.touched);
            if touched {
                self.state.confirm_cancel = true;
            } else {
                self.close_wizard();
            }
            return Ok(());
        }

        let Some(wizard) = self.state.wizard.as_mut() else {
            return Ok(());
        };
        match key.code {
            KeyCode::Tab => wizard.next_field(),
            KeyCode::BackTab => wizard.prev_field(),
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => wizard.back(),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                wizard.cycle_scope()
            }
            KeyCode::Char(' ') => {
                // Space edits toggles and choices; in text fields it is just
                // a character.
                let kind = wizard.active_descriptor().map(|d| d.kind);
                match kind {
                    Some(FieldKind::Toggle) | Some(FieldKind::Choice(_)) => {
                        wizard.toggle_or_cycle()
                    }
                    _ => wizard.input_char(' '),
                }
            }
            KeyCode::Char(c) => wizard.input_char(c),
            KeyCode::Backspace => wizard.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Tear down the wizard and return to the view it was opened from
    fn close_wizard(&mut self) {
        let return_view = match self.state.wizard.as_ref().map(|w| &w.flow) {
            Some(WizardFlow::ConferenceCreate) | None => View::Conferences,
            Some(WizardFlow::ConferenceEdit { .. }) | Some(WizardFlow::TrackCreate) => {
                View::ConferenceDetail
            }
        };
        self.state.wizard = None;
        self.state.current_view = return_view;
    }

    /// Final-step submission: build the payload, call the gateway, and on
    /// success tear the wizard down. On failure the wizard and its model are
    /// retained so the user can retry without re-entering data.
    async fn submit_wizard(&mut self) {
        let Some(wizard) = self.state.wizard.as_ref() else {
            return;
        };
        let payload = wizard.build_payload();
        let flow = wizard.flow.clone();

        match flow {
            WizardFlow::ConferenceCreate => match self.api.create_conference(payload).await {
                Ok(id) => {
                    match self.api.fetch_conference(&id).await {
                        Ok(saved) => self.active.set(saved),
                        Err(err) => {
                            tracing::warn!("failed to fetch created conference {id}: {err}");
                            self.state.push_error(format!("Error: {err}"));
                        }
                    }
                    self.state.wizard = None;
                    self.state.status_message = Some("Conference created!".to_string());
                    self.state.current_view = View::Conferences;
                    self.refresh_conferences().await;
                }
                Err(err) => self.state.push_error(format!("Error: {err}")),
            },
            WizardFlow::ConferenceEdit { conference_id } => {
                match self.api.update_conference(&conference_id, payload).await {
                    Ok(saved) => {
                        self.active.set(saved);
                        self.state.wizard = None;
                        self.state.status_message =
                            Some("Conference updated successfully!".to_string());
                        self.state.current_view = View::ConferenceDetail;
                    }
                    Err(err) => self.state.push_error(format!("Error: {err}")),
                }
            }
            WizardFlow::TrackCreate => {
                let Some(conference_id) = self.active.id().map(str::to_string) else {
                    self.state.push_error("Error: No active conference selected");
                    return;
                };
                let mut payload = payload;
                payload.insert(
                    "conference_id".to_string(),
                    Value::String(conference_id.clone()),
                );
                match self.api.create_track(payload).await {
                    Ok(track_id) => {
                        tracing::info!(%track_id, "track created");
                        // Refresh the active conference so the new track
                        // shows up in the detail view.
                        match self.api.fetch_conference(&conference_id).await {
                            Ok(saved) => self.active.set(saved),
                            Err(err) => tracing::warn!(
                                "failed to refresh conference after track creation: {err}"
                            ),
                        }
                        self.state.wizard = None;
                        self.state.status_message =
                            Some("Track created successfully!".to_string());
                        self.state.current_view = View::ConferenceDetail;
                    }
                    Err(err) => self.state.push_error(format!("Error: {err}")),
                }
            }
        }
    }
}
