//! Conference and track domain types as the backend serves them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Administrative level a setting applies at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Conference,
    Track,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Conference => "conference",
            Scope::Track => "track",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Scope::Conference => Scope::Track,
            Scope::Track => Scope::Conference,
        }
    }
}

/// Scalar carried by a `{value, scope}` setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// A scoped conference/track setting.
///
/// The backend normally serves the tagged object form, but settings written
/// through the create flow are stored from bare scalars; deserialization
/// accepts both and defaults the scope to conference level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SettingWire")]
pub struct Setting {
    pub value: SettingValue,
    pub scope: Scope,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SettingWire {
    Tagged { value: SettingValue, scope: Scope },
    Bare(SettingValue),
}

impl From<SettingWire> for Setting {
    fn from(wire: SettingWire) -> Self {
        match wire {
            SettingWire::Tagged { value, scope } => Setting { value, scope },
            SettingWire::Bare(value) => Setting {
                value,
                scope: Scope::Conference,
            },
        }
    }
}

impl Setting {
    pub fn as_bool(&self) -> bool {
        matches!(self.value, SettingValue::Bool(true))
    }

    pub fn as_i64(&self) -> i64 {
        match self.value {
            SettingValue::Int(n) => n,
            _ => 0,
        }
    }

    pub fn as_text(&self) -> &str {
        match &self.value {
            SettingValue::Text(s) => s,
            _ => "",
        }
    }
}

/// A track within a conference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "track_id", alias = "_id")]
    pub id: String,
    pub track_name: String,
    #[serde(default)]
    pub conference_id: String,
    #[serde(default)]
    pub track_chairs: Vec<String>,
    #[serde(default)]
    pub papers: Vec<String>,
    #[serde(default)]
    pub created_at: String,
}

/// A conference as the backend serves it: identity and venue information
/// plus the full table of scoped settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conference {
    #[serde(rename = "conference_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub acronym: String,
    pub short_acronym: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub submission_page: String,
    #[serde(default)]
    pub license_expiry: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub contact_emails: Vec<String>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub superchairs: Vec<String>,
    #[serde(default)]
    pub track_chairs: Vec<String>,
    #[serde(default)]
    pub pc_members: Vec<String>,

    pub double_blind_review: Setting,
    pub can_pc_see_unassigned_submissions: Setting,
    pub abstract_before_full: Setting,
    pub abstract_section_hidden: Setting,
    pub multiple_authors_allowed: Setting,
    pub max_abstract_length: Setting,
    pub submission_instructions: Setting,
    pub additional_fields_enabled: Setting,
    pub file_upload_fields: Setting,
    pub presenter_selection_required: Setting,
    pub submission_updates_allowed: Setting,
    pub new_submission_allowed: Setting,
    pub use_bidding_or_relevance: Setting,
    pub bidding_enabled: Setting,
    pub chairs_can_view_bids: Setting,
    pub llm_fraud_detection: Setting,
    pub reviewers_per_paper: Setting,
    pub can_pc_see_reviewer_names: Setting,
    pub status_menu_enabled: Setting,
    pub pc_can_enter_review: Setting,
    pub pc_can_access_reviews: Setting,
    pub decision_range: Setting,
    pub subreviewers_allowed: Setting,
    pub subreviewer_anonymous: Setting,
    pub track_chair_notifications: Setting,

    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Conference {
    pub fn display_name(&self) -> String {
        if self.acronym.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.acronym)
        }
    }

    /// Look up a scoped setting by its wire name.
    pub fn setting(&self, name: &str) -> Option<&Setting> {
        let setting = match name {
            "double_blind_review" => &self.double_blind_review,
            "can_pc_see_unassigned_submissions" => &self.can_pc_see_unassigned_submissions,
            "abstract_before_full" => &self.abstract_before_full,
            "abstract_section_hidden" => &self.abstract_section_hidden,
            "multiple_authors_allowed" => &self.multiple_authors_allowed,
            "max_abstract_length" => &self.max_abstract_length,
            "submission_instructions" => &self.submission_instructions,
            "additional_fields_enabled" => &self.additional_fields_enabled,
            "file_upload_fields" => &self.file_upload_fields,
            "presenter_selection_required" => &self.presenter_selection_required,
            "submission_updates_allowed" => &self.submission_updates_allowed,
            "new_submission_allowed" => &self.new_submission_allowed,
            "use_bidding_or_relevance" => &self.use_bidding_or_relevance,
            "bidding_enabled" => &self.bidding_enabled,
            "chairs_can_view_bids" => &self.chairs_can_view_bids,
            "llm_fraud_detection" => &self.llm_fraud_detection,
            "reviewers_per_paper" => &self.reviewers_per_paper,
            "can_pc_see_reviewer_names" => &self.can_pc_see_reviewer_names,
            "status_menu_enabled" => &self.status_menu_enabled,
            "pc_can_enter_review" => &self.pc_can_enter_review,
            "pc_can_access_reviews" => &self.pc_can_access_reviews,
            "decision_range" => &self.decision_range,
            "subreviewers_allowed" => &self.subreviewers_allowed,
            "subreviewer_anonymous" => &self.subreviewer_anonymous,
            "track_chair_notifications" => &self.track_chair_notifications,
            _ => return None,
        };
        Some(setting)
    }
}

/// Parse a backend date string, which may be a full RFC 3339 timestamp or a
/// bare `YYYY-MM-DD` date.
pub fn parse_backend_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    chrono::DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_deserializes_tagged_form() {
        let setting: Setting =
            serde_json::from_str(r#"{"value": true, "scope": "track"}"#).unwrap();
        assert_eq!(setting.value, SettingValue::Bool(true));
        assert_eq!(setting.scope, Scope::Track);
    }

    #[test]
    fn test_setting_deserializes_bare_scalar_with_default_scope() {
        let setting: Setting = serde_json::from_str("300").unwrap();
        assert_eq!(setting.value, SettingValue::Int(300));
        assert_eq!(setting.scope, Scope::Conference);
    }

    #[test]
    fn test_setting_serializes_tagged_form() {
        let setting = Setting {
            value: SettingValue::Text("relevance".to_string()),
            scope: Scope::Track,
        };
        let json = serde_json::to_value(&setting).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"value": "relevance", "scope": "track"})
        );
    }

    #[test]
    fn test_setting_accessors_fall_back_on_kind_mismatch() {
        let setting = Setting {
            value: SettingValue::Bool(true),
            scope: Scope::Track,
        };
        assert!(setting.as_bool());
        assert_eq!(setting.as_i64(), 0);
        assert_eq!(setting.as_text(), "");
    }

    #[test]
    fn test_parse_backend_date_accepts_both_forms() {
        let expected = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        assert_eq!(parse_backend_date("2026-05-01"), Some(expected));
        assert_eq!(parse_backend_date("2026-05-01T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_backend_date(""), None);
        assert_eq!(parse_backend_date("not a date"), None);
    }

    #[test]
    fn test_scope_toggle() {
        assert_eq!(Scope::Conference.toggle(), Scope::Track);
        assert_eq!(Scope::Track.toggle(), Scope::Conference);
    }

    #[test]
    fn test_track_accepts_mongo_style_id() {
        let track: Track = serde_json::from_str(
            r#"{"_id": "t1", "track_name": "Main Track", "conference_id": "c1"}"#,
        )
        .unwrap();
        assert_eq!(track.id, "t1");
        assert_eq!(track.track_name, "Main Track");
    }
}
