//! Per-step field validation
//!
//! Runs only on step-advance and submit attempts, never per keystroke.
//! Text-like fields must be non-empty once trimmed, numbers must parse,
//! toggles and dates always pass.

use super::descriptor::{FieldKind, StepDefinition, WizardSchema};
use super::field::FieldValue;
use super::model::FormModel;

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Required,
    NotANumber,
}

impl InvalidReason {
    pub fn message(&self) -> &'static str {
        match self {
            InvalidReason::Required => "This field is required",
            InvalidReason::NotANumber => "Please enter a valid number",
        }
    }
}

/// One failed field, in step declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidField {
    pub name: &'static str,
    pub reason: InvalidReason,
}

/// Check every field of `step` against the model, collecting all failures
/// in the order the step declares its fields.
pub fn validate(step: &StepDefinition, schema: &WizardSchema, model: &FormModel) -> Vec<InvalidField> {
    let mut invalid = Vec::new();

    for &name in step.fields {
        let Some(descriptor) = schema.descriptor(name) else {
            continue;
        };

        let failure = match model.value(name) {
            None => Some(InvalidReason::Required),
            Some(value) => match (descriptor.kind, value) {
                (FieldKind::Text, FieldValue::Text(s))
                | (FieldKind::Choice(_), FieldValue::Choice(s)) => {
                    s.trim().is_empty().then_some(InvalidReason::Required)
                }
                (FieldKind::Number, FieldValue::Number(n)) => {
                    n.value().is_none().then_some(InvalidReason::NotANumber)
                }
                (FieldKind::Toggle, _) | (FieldKind::Date, _) => None,
                // Value variant diverging from the declared kind cannot be
                // produced through the model API; treat it as missing.
                _ => Some(InvalidReason::Required),
            },
        };

        if let Some(reason) = failure {
            invalid.push(InvalidField { name: descriptor.name, reason });
        }
    }

    invalid
}
