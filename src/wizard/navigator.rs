//! Step navigation state machine
//!
//! The navigator owns the current step index and the invalid-field list.
//! `Back` never validates; the primary control validates the current step
//! and either stays, advances, or hands the submit decision to the caller.

use super::descriptor::WizardSchema;
use super::model::FormModel;
use super::validate::{validate, InvalidField};

/// Result of pressing the primary (Next/Submit) control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryOutcome {
    /// Validation failed; the step does not change and the failures are
    /// recorded for field-level highlighting.
    Rejected,
    /// Moved to the next step.
    Advanced,
    /// Final step validated clean; the caller should build the payload and
    /// invoke the gateway.
    Submit,
}

#[derive(Debug, Clone, Default)]
pub struct StepNavigator {
    step: usize,
    invalid: Vec<InvalidField>,
}

impl StepNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn invalid(&self) -> &[InvalidField] {
        &self.invalid
    }

    pub fn invalid_reason(&self, name: &str) -> Option<InvalidField> {
        self.invalid.iter().copied().find(|f| f.name == name)
    }

    pub fn is_invalid(&self, name: &str) -> bool {
        self.invalid.iter().any(|f| f.name == name)
    }

    /// Drop a field's invalid flag; called whenever the field is edited.
    pub fn clear_field(&mut self, name: &str) {
        self.invalid.retain(|f| f.name != name);
    }

    /// Go back one step. No-op at the first step; never re-validates, and
    /// stale error highlighting is cleared on entry to the new step.
    pub fn back(&mut self) {
        if self.step > 0 {
            self.step -= 1;
            self.invalid.clear();
        }
    }

    /// Validate the current step and advance or signal submission.
    pub fn primary(&mut self, schema: &WizardSchema, model: &FormModel) -> PrimaryOutcome {
        let Some(step) = schema.step(self.step) else {
            return PrimaryOutcome::Rejected;
        };

        let invalid = validate(step, schema, model);
        if !invalid.is_empty() {
            self.invalid = invalid;
            return PrimaryOutcome::Rejected;
        }

        if self.step < schema.last_step() {
            self.step += 1;
            self.invalid.clear();
            PrimaryOutcome::Advanced
        } else {
            PrimaryOutcome::Submit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::descriptor::{FieldDescriptor, StepDefinition};
    use crate::wizard::field::FieldValue;
    use crate::wizard::validate::InvalidReason;

    fn schema() -> WizardSchema {
        WizardSchema {
            title: "Test",
            fields: vec![
                FieldDescriptor::text("name", ""),
                FieldDescriptor::toggle("bidding_enabled", false),
            ],
            steps: vec![
                StepDefinition {
                    title: "First",
                    fields: &["name"],
                },
                StepDefinition {
                    title: "Second",
                    fields: &["bidding_enabled"],
                },
            ],
        }
    }

    #[test]
    fn test_starts_at_step_zero_with_no_flags() {
        let nav = StepNavigator::new();
        assert_eq!(nav.step(), 0);
        assert!(nav.invalid().is_empty());
    }

    #[test]
    fn test_primary_rejects_empty_required_field() {
        let schema = schema();
        let model = FormModel::from_schema(&schema);
        let mut nav = StepNavigator::new();

        assert_eq!(nav.primary(&schema, &model), PrimaryOutcome::Rejected);
        assert_eq!(nav.step(), 0);
        assert!(nav.is_invalid("name"));
        assert_eq!(
            nav.invalid_reason("name").unwrap().reason,
            InvalidReason::Required
        );
    }

    #[test]
    fn test_primary_advances_when_clean() {
        let schema = schema();
        let mut model = FormModel::from_schema(&schema);
        model.set_value("name", FieldValue::text("ICAI"));
        let mut nav = StepNavigator::new();

        assert_eq!(nav.primary(&schema, &model), PrimaryOutcome::Advanced);
        assert_eq!(nav.step(), 1);
        assert!(nav.invalid().is_empty());
    }

    #[test]
    fn test_final_step_yields_submit() {
        let schema = schema();
        let mut model = FormModel::from_schema(&schema);
        model.set_value("name", FieldValue::text("ICAI"));
        let mut nav = StepNavigator::new();

        nav.primary(&schema, &model);
        assert_eq!(nav.primary(&schema, &model), PrimaryOutcome::Submit);
        assert_eq!(nav.step(), 1);
    }

    #[test]
    fn test_submit_never_reached_while_invalid() {
        let schema = schema();
        let model = FormModel::from_schema(&schema);
        let mut nav = StepNavigator::new();

        for _ in 0..3 {
            assert_eq!(nav.primary(&schema, &model), PrimaryOutcome::Rejected);
        }
        assert_eq!(nav.step(), 0);
    }

    #[test]
    fn test_back_is_noop_at_first_step() {
        let mut nav = StepNavigator::new();
        nav.back();
        assert_eq!(nav.step(), 0);
    }

    #[test]
    fn test_back_clears_stale_flags_without_validating() {
        let schema = schema();
        let mut model = FormModel::from_schema(&schema);
        model.set_value("name", FieldValue::text("ICAI"));
        let mut nav = StepNavigator::new();
        nav.primary(&schema, &model);

        // Step one's field is now invalid, but Back must not notice.
        model.set_value("name", FieldValue::text(""));
        nav.back();
        assert_eq!(nav.step(), 0);
        assert!(nav.invalid().is_empty());
    }

    #[test]
    fn test_clear_field_drops_single_flag() {
        let schema = schema();
        let model = FormModel::from_schema(&schema);
        let mut nav = StepNavigator::new();
        nav.primary(&schema, &model);
        assert!(nav.is_invalid("name"));

        nav.clear_field("name");
        assert!(!nav.is_invalid("name"));
    }
}
