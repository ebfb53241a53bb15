//! Track creation wizard definition

use super::conference::BIDDING_OPTIONS;
use super::descriptor::{FieldDescriptor, StepDefinition, WizardSchema};
use super::{Wizard, WizardFlow};
use crate::state::Scope;

const STEPS: &[StepDefinition] = &[
    StepDefinition {
        title: "Track Information",
        fields: &["name", "short_name", "description"],
    },
    StepDefinition {
        title: "Submission Settings",
        fields: &[
            "abstract_before_full",
            "multiple_authors_allowed",
            "max_abstract_length",
            "file_upload_fields",
            "presenter_selection_required",
            "submission_updates_allowed",
        ],
    },
    StepDefinition {
        title: "Review Settings",
        fields: &[
            "use_bidding_or_relevance",
            "bidding_enabled",
            "reviewers_per_paper",
            "pc_can_access_reviews",
            "subreviewers_allowed",
        ],
    },
    StepDefinition {
        title: "Notifications",
        fields: &["track_chair_notifications"],
    },
];

fn schema() -> WizardSchema {
    let scope = Scope::Track;
    WizardSchema {
        title: "Create Track",
        fields: vec![
            FieldDescriptor::text("name", ""),
            FieldDescriptor::text("short_name", ""),
            FieldDescriptor::text("description", ""),
            FieldDescriptor::toggle("abstract_before_full", true).tagged(scope),
            FieldDescriptor::toggle("multiple_authors_allowed", true).tagged(scope),
            FieldDescriptor::number("max_abstract_length", 300).tagged(scope),
            FieldDescriptor::text("file_upload_fields", "paper, supplementary").tagged(scope),
            FieldDescriptor::toggle("presenter_selection_required", false).tagged(scope),
            FieldDescriptor::toggle("submission_updates_allowed", false).tagged(scope),
            FieldDescriptor::choice("use_bidding_or_relevance", BIDDING_OPTIONS, "relevance")
                .tagged(scope),
            FieldDescriptor::toggle("bidding_enabled", false).tagged(scope),
            FieldDescriptor::number("reviewers_per_paper", 3).tagged(scope),
            FieldDescriptor::toggle("pc_can_access_reviews", false).tagged(scope),
            FieldDescriptor::toggle("subreviewers_allowed", false).tagged(scope),
            FieldDescriptor::toggle("track_chair_notifications", true).tagged(scope),
        ],
        steps: STEPS.to_vec(),
    }
}

/// Fresh track-creation wizard at its defaults.
pub fn track_create_wizard() -> Wizard {
    Wizard::new(schema(), WizardFlow::TrackCreate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{FieldValue, PayloadMode};
    use serde_json::json;

    #[test]
    fn test_every_step_field_has_a_descriptor() {
        let schema = schema();
        for step in &schema.steps {
            for field in step.fields {
                assert!(
                    schema.descriptor(field).is_some(),
                    "step field {field} missing from schema"
                );
            }
        }
    }

    #[test]
    fn test_four_steps() {
        let w = track_create_wizard();
        assert_eq!(w.schema.step_count(), 4);
        assert_eq!(w.schema.steps[0].title, "Track Information");
        assert_eq!(w.schema.steps[3].title, "Notifications");
    }

    #[test]
    fn test_settings_default_to_track_scope() {
        let w = track_create_wizard();
        assert_eq!(
            w.model.get("reviewers_per_paper").unwrap().scope,
            Some(Scope::Track)
        );
        assert_eq!(w.model.get("name").unwrap().scope, None);
    }

    #[test]
    fn test_create_payload_unwraps_settings() {
        let mut w = track_create_wizard();
        w.model.set_value("name", FieldValue::text("Main Track"));
        w.model.set_value("short_name", FieldValue::text("main"));
        w.model.set_value("description", FieldValue::text("General submissions"));

        let payload = w.build_payload();
        assert_eq!(payload["name"], json!("Main Track"));
        assert_eq!(payload["abstract_before_full"], json!(true));
        assert_eq!(payload["max_abstract_length"], json!(300));
        assert_eq!(payload["use_bidding_or_relevance"], json!("relevance"));
        assert_eq!(payload["file_upload_fields"], json!("paper, supplementary"));
    }

    #[test]
    fn test_flow_is_create_mode() {
        let w = track_create_wizard();
        assert_eq!(w.flow.payload_mode(), PayloadMode::Create);
        assert_eq!(w.flow.submit_label(), "Create Track");
    }
}
