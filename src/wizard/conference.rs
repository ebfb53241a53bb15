//! Conference creation and editing wizard definitions

use chrono::{Months, Utc};

use super::descriptor::{FieldDescriptor, FieldKind, StepDefinition, WizardSchema};
use super::field::{FieldState, FieldValue};
use super::model::FormModel;
use super::{Wizard, WizardFlow};
use crate::state::{parse_backend_date, Conference, Scope, Setting};

pub(super) const BIDDING_OPTIONS: &[&str] = &["relevance", "bidding"];

const CREATE_STEPS: &[StepDefinition] = &[
    StepDefinition {
        title: "Conference Information",
        fields: &[
            "name",
            "acronym",
            "short_acronym",
            "website",
            "city",
            "venue",
            "state",
            "country",
            "submission_page",
            "license_expiry",
            "auto_update_submission_dates",
            "contact_emails",
            "forwarding_emails_conference",
            "forwarding_emails_tracks",
        ],
    },
    StepDefinition {
        title: "Access Information",
        fields: &["double_blind_review", "can_pc_see_unassigned_submissions"],
    },
    StepDefinition {
        title: "Submission Information",
        fields: &[
            "abstract_before_full",
            "abstract_section_hidden",
            "multiple_authors_allowed",
            "max_abstract_length",
            "submission_instructions",
            "additional_fields_enabled",
            "file_upload_fields",
            "presenter_selection_required",
            "submission_updates_allowed",
            "new_submission_allowed",
        ],
    },
    StepDefinition {
        title: "Paper Assignment",
        fields: &[
            "use_bidding_or_relevance",
            "bidding_enabled",
            "chairs_can_view_bids",
            "llm_fraud_detection",
            "reviewers_per_paper",
        ],
    },
    StepDefinition {
        title: "Reviewing Information",
        fields: &[
            "can_pc_see_reviewer_names",
            "status_menu_enabled",
            "pc_can_enter_review",
            "pc_can_access_reviews",
            "decision_range",
            "subreviewers_allowed",
            "subreviewer_anonymous",
        ],
    },
    StepDefinition {
        title: "Notifications",
        fields: &["track_chair_notifications"],
    },
];

const EDIT_STEPS: &[StepDefinition] = &[
    StepDefinition {
        title: "Conference Information",
        fields: &[
            "name",
            "acronym",
            "short_acronym",
            "website",
            "city",
            "venue",
            "state",
            "country",
            "license_expiry",
            "contact_emails",
            "start_date",
            "end_date",
        ],
    },
    StepDefinition {
        title: "Access Information",
        fields: &["double_blind_review", "can_pc_see_unassigned_submissions"],
    },
    StepDefinition {
        title: "Submission Information",
        fields: &[
            "abstract_before_full",
            "abstract_section_hidden",
            "max_abstract_length",
            "submission_instructions",
            "additional_fields_enabled",
            "file_upload_fields",
            "submission_updates_allowed",
            "new_submission_allowed",
        ],
    },
    StepDefinition {
        title: "Paper Assignment",
        fields: &[
            "use_bidding_or_relevance",
            "bidding_enabled",
            "chairs_can_view_bids",
            "reviewers_per_paper",
        ],
    },
    StepDefinition {
        title: "Reviewing Information",
        fields: &[
            "can_pc_see_reviewer_names",
            "status_menu_enabled",
            "pc_can_enter_review",
            "pc_can_access_reviews",
            "decision_range",
            "subreviewers_allowed",
            "subreviewer_anonymous",
        ],
    },
    StepDefinition {
        title: "Notifications",
        fields: &["track_chair_notifications"],
    },
];

/// Settings shared by the create and edit schemas, at their platform
/// defaults and default scopes.
fn setting_descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::toggle("double_blind_review", false).tagged(Scope::Conference),
        FieldDescriptor::toggle("can_pc_see_unassigned_submissions", false)
            .tagged(Scope::Conference),
        FieldDescriptor::toggle("abstract_before_full", true).tagged(Scope::Conference),
        FieldDescriptor::toggle("abstract_section_hidden", false).tagged(Scope::Track),
        FieldDescriptor::toggle("multiple_authors_allowed", true).tagged(Scope::Track),
        FieldDescriptor::number("max_abstract_length", 300).tagged(Scope::Track),
        FieldDescriptor::text("submission_instructions", "no").tagged(Scope::Track),
        FieldDescriptor::toggle("additional_fields_enabled", true).tagged(Scope::Track),
        FieldDescriptor::text("file_upload_fields", "paper, additional").tagged(Scope::Track),
        FieldDescriptor::toggle("presenter_selection_required", false).tagged(Scope::Track),
        FieldDescriptor::toggle("submission_updates_allowed", false).tagged(Scope::Track),
        FieldDescriptor::toggle("new_submission_allowed", false).tagged(Scope::Conference),
        FieldDescriptor::choice("use_bidding_or_relevance", BIDDING_OPTIONS, "relevance")
            .tagged(Scope::Track),
        FieldDescriptor::toggle("bidding_enabled", false).tagged(Scope::Track),
        FieldDescriptor::toggle("chairs_can_view_bids", false).tagged(Scope::Track),
        FieldDescriptor::toggle("llm_fraud_detection", false).tagged(Scope::Track),
        FieldDescriptor::number("reviewers_per_paper", 5).tagged(Scope::Track),
        FieldDescriptor::toggle("can_pc_see_reviewer_names", false).tagged(Scope::Track),
        FieldDescriptor::toggle("status_menu_enabled", true).tagged(Scope::Track),
        FieldDescriptor::toggle("pc_can_enter_review", false).tagged(Scope::Track),
        FieldDescriptor::toggle("pc_can_access_reviews", false).tagged(Scope::Track),
        FieldDescriptor::number("decision_range", 10).tagged(Scope::Track),
        FieldDescriptor::toggle("subreviewers_allowed", true).tagged(Scope::Track),
        FieldDescriptor::toggle("subreviewer_anonymous", true).tagged(Scope::Track),
        FieldDescriptor::toggle("track_chair_notifications", false).tagged(Scope::Track),
    ]
}

fn create_schema() -> WizardSchema {
    let license_default = Utc::now().date_naive() + Months::new(12);
    let mut fields = vec![
        FieldDescriptor::text("name", ""),
        FieldDescriptor::text("acronym", ""),
        FieldDescriptor::text("short_acronym", ""),
        FieldDescriptor::text("website", "not set"),
        FieldDescriptor::text("city", "not set"),
        FieldDescriptor::text("venue", "none"),
        FieldDescriptor::text("state", "none"),
        FieldDescriptor::text("country", "not set"),
        FieldDescriptor::text("submission_page", "not set"),
        FieldDescriptor::date_with_default("license_expiry", license_default).read_only(),
        FieldDescriptor::toggle("auto_update_submission_dates", false),
        FieldDescriptor::comma_list("contact_emails", ""),
        FieldDescriptor::comma_list("forwarding_emails_conference", ""),
        FieldDescriptor::comma_list("forwarding_emails_tracks", ""),
    ];
    fields.extend(setting_descriptors());
    WizardSchema {
        title: "Create Conference",
        fields,
        steps: CREATE_STEPS.to_vec(),
    }
}

fn edit_schema() -> WizardSchema {
    let mut fields = vec![
        FieldDescriptor::text("name", ""),
        FieldDescriptor::text("acronym", ""),
        FieldDescriptor::text("short_acronym", ""),
        FieldDescriptor::text("website", ""),
        FieldDescriptor::text("city", ""),
        FieldDescriptor::text("venue", ""),
        FieldDescriptor::text("state", ""),
        FieldDescriptor::text("country", ""),
        FieldDescriptor::date("license_expiry"),
        FieldDescriptor::comma_list("contact_emails", ""),
        FieldDescriptor::date("start_date"),
        FieldDescriptor::date("end_date"),
    ];
    // The edit flow exposes the settings its steps name; the remaining
    // create-time settings are not editable after the fact.
    let step_fields: Vec<&str> = EDIT_STEPS.iter().flat_map(|s| s.fields.iter().copied()).collect();
    fields.extend(
        setting_descriptors()
            .into_iter()
            .filter(|d| step_fields.contains(&d.name)),
    );
    WizardSchema {
        title: "Edit Conference",
        fields,
        steps: EDIT_STEPS.to_vec(),
    }
}

/// Fresh conference-creation wizard at the platform defaults.
pub fn conference_create_wizard() -> Wizard {
    Wizard::new(create_schema(), WizardFlow::ConferenceCreate)
}

/// Editing wizard populated from a fetched conference.
pub fn conference_edit_wizard(conference: &Conference) -> Wizard {
    let schema = edit_schema();
    let mut model = FormModel::from_schema(&schema);

    model.set_value("name", FieldValue::text(&conference.name));
    model.set_value("acronym", FieldValue::text(&conference.acronym));
    model.set_value("short_acronym", FieldValue::text(&conference.short_acronym));
    model.set_value("website", FieldValue::text(&conference.website));
    model.set_value("city", FieldValue::text(&conference.city));
    model.set_value("venue", FieldValue::text(&conference.venue));
    model.set_value("state", FieldValue::text(&conference.state));
    model.set_value("country", FieldValue::text(&conference.country));
    model.set_value("license_expiry", date_value(Some(&conference.license_expiry)));
    model.set_value("start_date", date_value(conference.start_date.as_deref()));
    model.set_value("end_date", date_value(conference.end_date.as_deref()));
    model.set_value(
        "contact_emails",
        FieldValue::text(&conference.contact_emails.join(", ")),
    );

    for descriptor in &schema.fields {
        if let Some(setting) = conference.setting(descriptor.name) {
            model.insert(
                descriptor.name,
                FieldState::tagged(setting_value(descriptor, setting), setting.scope),
            );
        }
    }

    Wizard::with_model(
        schema,
        model,
        WizardFlow::ConferenceEdit {
            conference_id: conference.id.clone(),
        },
    )
}

fn date_value(raw: Option<&str>) -> FieldValue {
    raw.and_then(parse_backend_date)
        .map(FieldValue::date)
        .unwrap_or_else(FieldValue::empty_date)
}

/// Convert a backend setting into the value kind the descriptor declares.
fn setting_value(descriptor: &FieldDescriptor, setting: &Setting) -> FieldValue {
    match descriptor.kind {
        FieldKind::Toggle => FieldValue::Toggle(setting.as_bool()),
        FieldKind::Number => FieldValue::number(setting.as_i64()),
        FieldKind::Choice(_) => FieldValue::choice(setting.as_text()),
        FieldKind::Text => FieldValue::text(setting.as_text()),
        FieldKind::Date => FieldValue::empty_date(),
    }
}
