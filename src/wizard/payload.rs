//! Submission payload construction
//!
//! Building is pure and never fails: validation is a precondition the
//! navigator enforces before the builder runs. Field order follows the
//! schema declaration, so two builds over the same model are identical.

use chrono::SecondsFormat;
use serde_json::{json, Map, Value};

use super::descriptor::{FieldShape, SerializeRule, WizardSchema};
use super::field::{FieldState, FieldValue};
use super::model::FormModel;

/// Whether tagged fields are unwrapped (create) or preserved as
/// `{value, scope}` objects (edit). The backend expects this asymmetry
/// per flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadMode {
    Create,
    Edit,
}

/// Flatten the model into the JSON body the gateway expects.
pub fn build(schema: &WizardSchema, model: &FormModel, mode: PayloadMode) -> Map<String, Value> {
    let mut payload = Map::new();

    for descriptor in &schema.fields {
        let Some(state) = model.get(descriptor.name) else {
            continue;
        };

        let scalar = scalar_json(&state.value, descriptor.serialize);
        let emitted = match (descriptor.shape, mode) {
            (FieldShape::Tagged(_), PayloadMode::Edit) => tagged_json(state, scalar),
            _ => scalar,
        };
        payload.insert(descriptor.name.to_string(), emitted);
    }

    payload
}

fn tagged_json(state: &FieldState, scalar: Value) -> Value {
    let scope = state
        .scope
        .map(|s| s.as_str())
        .unwrap_or_else(|| crate::state::Scope::Conference.as_str());
    json!({ "value": scalar, "scope": scope })
}

fn scalar_json(value: &FieldValue, rule: SerializeRule) -> Value {
    match rule {
        SerializeRule::IsoDate => iso_date_json(value),
        SerializeRule::CommaList => comma_list_json(value),
        SerializeRule::Verbatim => verbatim_json(value),
    }
}

fn verbatim_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(s) | FieldValue::Choice(s) => Value::String(s.clone()),
        FieldValue::Number(n) => n.value().map(Value::from).unwrap_or(Value::Null),
        FieldValue::Toggle(b) => Value::Bool(*b),
        FieldValue::Date(_) => iso_date_json(value),
    }
}

fn iso_date_json(value: &FieldValue) -> Value {
    let FieldValue::Date(input) = value else {
        return verbatim_json(value);
    };
    match input.value() {
        Some(date) => {
            let timestamp = date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
                .unwrap_or_default();
            Value::String(timestamp)
        }
        // Unset dates are sent as empty strings, never an error.
        None => Value::String(String::new()),
    }
}

fn comma_list_json(value: &FieldValue) -> Value {
    let FieldValue::Text(raw) = value else {
        return verbatim_json(value);
    };
    let entries: Vec<Value> = raw
        .split(',')
        .map(|entry| Value::String(entry.trim().to_string()))
        .collect();
    Value::Array(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Scope;
    use crate::wizard::descriptor::FieldDescriptor;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn schema() -> WizardSchema {
        WizardSchema {
            title: "Test",
            fields: vec![
                FieldDescriptor::text("name", ""),
                FieldDescriptor::comma_list("contact_emails", ""),
                FieldDescriptor::date("start_date"),
                FieldDescriptor::toggle("bidding_enabled", false).tagged(Scope::Track),
                FieldDescriptor::number("reviewers_per_paper", 3).tagged(Scope::Track),
            ],
            steps: vec![],
        }
    }

    fn model() -> FormModel {
        let schema = schema();
        let mut model = FormModel::from_schema(&schema);
        model.set_value("name", FieldValue::text("ICAI"));
        model.set_value("contact_emails", FieldValue::text("a@x.org, b@x.org"));
        model.set_value(
            "start_date",
            FieldValue::date(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()),
        );
        model
    }

    #[test]
    fn test_create_mode_unwraps_tagged_fields() {
        let payload = build(&schema(), &model(), PayloadMode::Create);
        assert_eq!(payload["bidding_enabled"], json!(false));
        assert_eq!(payload["reviewers_per_paper"], json!(3));
    }

    #[test]
    fn test_edit_mode_preserves_tagged_shape() {
        let payload = build(&schema(), &model(), PayloadMode::Edit);
        assert_eq!(
            payload["bidding_enabled"],
            json!({ "value": false, "scope": "track" })
        );
        assert_eq!(
            payload["reviewers_per_paper"],
            json!({ "value": 3, "scope": "track" })
        );
        // Bare fields are unaffected by the mode.
        assert_eq!(payload["name"], json!("ICAI"));
    }

    #[test]
    fn test_dates_become_rfc3339_strings() {
        let payload = build(&schema(), &model(), PayloadMode::Create);
        assert_eq!(payload["start_date"], json!("2026-05-01T00:00:00.000Z"));
    }

    #[test]
    fn test_unset_date_becomes_empty_string() {
        let schema = schema();
        let mut model = model();
        model.set_value("start_date", FieldValue::empty_date());
        let payload = build(&schema, &model, PayloadMode::Edit);
        assert_eq!(payload["start_date"], json!(""));
    }

    #[test]
    fn test_comma_list_splits_and_trims() {
        let payload = build(&schema(), &model(), PayloadMode::Create);
        assert_eq!(payload["contact_emails"], json!(["a@x.org", "b@x.org"]));
    }

    #[test]
    fn test_empty_comma_list_keeps_single_empty_entry() {
        let schema = schema();
        let mut model = model();
        model.set_value("contact_emails", FieldValue::text(""));
        let payload = build(&schema, &model, PayloadMode::Create);
        assert_eq!(payload["contact_emails"], json!([""]));
    }

    #[test]
    fn test_build_is_pure() {
        let schema = schema();
        let model = model();
        let first = build(&schema, &model, PayloadMode::Edit);
        let second = build(&schema, &model, PayloadMode::Edit);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unparsed_number_emits_null_rather_than_panicking() {
        let schema = schema();
        let mut model = model();
        model.set_value(
            "reviewers_per_paper",
            FieldValue::Number(crate::wizard::field::NumberInput::default()),
        );
        let payload = build(&schema, &model, PayloadMode::Create);
        assert_eq!(payload["reviewers_per_paper"], Value::Null);
    }
}
