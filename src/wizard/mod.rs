//! Stepped configuration form core
//!
//! One wizard instance drives a multi-step form: a static schema of field
//! descriptors and steps, the in-memory model, and the step navigator with
//! its invalid-field flags. Instantiated for conference creation, track
//! creation, and conference editing.

mod conference;
mod descriptor;
mod field;
mod model;
mod navigator;
mod payload;
mod track;
mod validate;

pub use conference::{conference_create_wizard, conference_edit_wizard};
pub use descriptor::{FieldDescriptor, FieldKind, FieldShape, SerializeRule, StepDefinition, WizardSchema};
pub use field::{DateInput, FieldState, FieldValue, NumberInput};
pub use model::FormModel;
pub use navigator::{PrimaryOutcome, StepNavigator};
pub use payload::PayloadMode;
pub use track::track_create_wizard;
pub use validate::{validate, InvalidField, InvalidReason};

use serde_json::{Map, Value};

/// Which flow this wizard instance belongs to. The flow fixes the payload
/// mode and where the app returns after the wizard closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardFlow {
    ConferenceCreate,
    ConferenceEdit { conference_id: String },
    TrackCreate,
}

impl WizardFlow {
    pub fn payload_mode(&self) -> PayloadMode {
        match self {
            WizardFlow::ConferenceEdit { .. } => PayloadMode::Edit,
            _ => PayloadMode::Create,
        }
    }

    /// Label of the primary button on the final step.
    pub fn submit_label(&self) -> &'static str {
        match self {
            WizardFlow::ConferenceCreate => "Create Conference",
            WizardFlow::ConferenceEdit { .. } => "Update Conference",
            WizardFlow::TrackCreate => "Create Track",
        }
    }
}

/// A live stepped form: schema + model + navigation + focus.
#[derive(Debug, Clone)]
pub struct Wizard {
    pub schema: WizardSchema,
    pub model: FormModel,
    pub nav: StepNavigator,
    pub flow: WizardFlow,
    /// Focused field within the current step.
    pub active_field: usize,
    /// Whether the user edited anything, for cancel confirmation.
    pub touched: bool,
}

impl Wizard {
    pub fn new(schema: WizardSchema, flow: WizardFlow) -> Self {
        let model = FormModel::from_schema(&schema);
        Self::with_model(schema, model, flow)
    }

    pub fn with_model(schema: WizardSchema, model: FormModel, flow: WizardFlow) -> Self {
        Self {
            schema,
            model,
            nav: StepNavigator::new(),
            flow,
            active_field: 0,
            touched: false,
        }
    }

    pub fn current_step(&self) -> &StepDefinition {
        &self.schema.steps[self.nav.step()]
    }

    pub fn field_count(&self) -> usize {
        self.current_step().fields.len()
    }

    pub fn is_final_step(&self) -> bool {
        self.nav.step() == self.schema.last_step()
    }

    pub fn primary_label(&self) -> &'static str {
        if self.is_final_step() {
            self.flow.submit_label()
        } else {
            "Next"
        }
    }

    pub fn next_field(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.active_field = (self.active_field + 1) % count;
        }
    }

    pub fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        if self.active_field == 0 {
            self.active_field = count - 1;
        } else {
            self.active_field -= 1;
        }
    }

    pub fn active_field_name(&self) -> Option<&'static str> {
        self.current_step().fields.get(self.active_field).copied()
    }

    pub fn active_descriptor(&self) -> Option<&FieldDescriptor> {
        self.active_field_name()
            .and_then(|name| self.schema.descriptor(name))
    }

    fn editable_active_field(&self) -> Option<&'static str> {
        let descriptor = self.active_descriptor()?;
        if descriptor.read_only {
            None
        } else {
            Some(descriptor.name)
        }
    }

    /// Type a character into the focused field. Clears the field's invalid
    /// flag; validation does not rerun until the next transition attempt.
    pub fn input_char(&mut self, c: char) {
        let Some(name) = self.editable_active_field() else {
            return;
        };
        if let Some(value) = self.model.value_mut(name) {
            value.push_char(c);
            self.nav.clear_field(name);
            self.touched = true;
        }
    }

    pub fn backspace(&mut self) {
        let Some(name) = self.editable_active_field() else {
            return;
        };
        if let Some(value) = self.model.value_mut(name) {
            value.pop_char();
            self.nav.clear_field(name);
            self.touched = true;
        }
    }

    /// Space key: flip a toggle or advance a choice to its next option.
    pub fn toggle_or_cycle(&mut self) {
        let Some(descriptor) = self.active_descriptor() else {
            return;
        };
        if descriptor.read_only {
            return;
        }
        let name = descriptor.name;
        let options = match descriptor.kind {
            FieldKind::Choice(options) => Some(options),
            _ => None,
        };
        if let Some(value) = self.model.value_mut(name) {
            match options {
                Some(options) => value.cycle_choice(options),
                None => value.toggle(),
            }
            self.nav.clear_field(name);
            self.touched = true;
        }
    }

    /// Retag the focused field's scope; no-op for bare fields.
    pub fn cycle_scope(&mut self) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        if let Some(scope) = self.model.get(name).and_then(|s| s.scope) {
            self.model.set_scope(name, scope.toggle());
            self.touched = true;
        }
    }

    pub fn back(&mut self) {
        self.nav.back();
        self.active_field = 0;
    }

    pub fn primary(&mut self) -> PrimaryOutcome {
        let outcome = self.nav.primary(&self.schema, &self.model);
        if outcome == PrimaryOutcome::Advanced {
            self.active_field = 0;
        }
        outcome
    }

    pub fn build_payload(&self) -> Map<String, Value> {
        payload::build(&self.schema, &self.model, self.flow.payload_mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Scope;

    fn wizard() -> Wizard {
        track_create_wizard()
    }

    mod focus {
        use super::*;

        #[test]
        fn test_field_focus_wraps_within_step() {
            let mut w = wizard();
            assert_eq!(w.field_count(), 3); // name, short_name, description
            w.next_field();
            w.next_field();
            w.next_field();
            assert_eq!(w.active_field, 0);
            w.prev_field();
            assert_eq!(w.active_field, 2);
        }

        #[test]
        fn test_advancing_resets_focus() {
            let mut w = wizard();
            for field in ["name", "short_name", "description"] {
                w.model.set_value(field, FieldValue::text("x"));
            }
            w.next_field();
            assert_eq!(w.primary(), PrimaryOutcome::Advanced);
            assert_eq!(w.active_field, 0);
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_input_char_marks_touched_and_clears_flag() {
            let mut w = wizard();
            assert_eq!(w.primary(), PrimaryOutcome::Rejected);
            assert!(w.nav.is_invalid("name"));

            w.input_char('I');
            assert!(w.touched);
            assert!(!w.nav.is_invalid("name"));
            // Other flags stay until their fields are edited.
            assert!(w.nav.is_invalid("short_name"));
        }

        #[test]
        fn test_toggle_or_cycle_flips_toggle_field() {
            let mut w = wizard();
            // Move to step 2 (submission settings) where toggles live.
            for field in ["name", "short_name", "description"] {
                w.model.set_value(field, FieldValue::text("x"));
            }
            w.primary();
            assert_eq!(w.current_step().fields[0], "abstract_before_full");
            w.toggle_or_cycle();
            assert_eq!(
                w.model.value("abstract_before_full"),
                Some(&FieldValue::Toggle(false))
            );
        }

        #[test]
        fn test_cycle_scope_retags_tagged_field() {
            let mut w = wizard();
            for field in ["name", "short_name", "description"] {
                w.model.set_value(field, FieldValue::text("x"));
            }
            w.primary();
            w.cycle_scope();
            assert_eq!(
                w.model.get("abstract_before_full").unwrap().scope,
                Some(Scope::Conference)
            );
        }

        #[test]
        fn test_cycle_scope_ignores_bare_field() {
            let mut w = wizard();
            w.cycle_scope(); // focused on bare "name"
            assert_eq!(w.model.get("name").unwrap().scope, None);
        }
    }

    mod scenarios {
        use super::*;

        #[test]
        fn test_empty_name_blocks_first_step() {
            let mut w = wizard();
            assert_eq!(w.primary(), PrimaryOutcome::Rejected);
            assert_eq!(w.nav.step(), 0);
            assert!(w.nav.is_invalid("name"));
        }

        #[test]
        fn test_populated_step_advances() {
            let mut w = wizard();
            w.model.set_value("name", FieldValue::text("ICAI"));
            w.model.set_value("short_name", FieldValue::text("icai"));
            w.model.set_value("description", FieldValue::text("AI track"));
            assert_eq!(w.primary(), PrimaryOutcome::Advanced);
            assert_eq!(w.nav.step(), 1);
        }

        #[test]
        fn test_full_walk_reaches_submit() {
            let mut w = wizard();
            w.model.set_value("name", FieldValue::text("ICAI"));
            w.model.set_value("short_name", FieldValue::text("icai"));
            w.model.set_value("description", FieldValue::text("AI track"));

            assert_eq!(w.primary(), PrimaryOutcome::Advanced);
            assert_eq!(w.primary(), PrimaryOutcome::Advanced);
            assert_eq!(w.primary(), PrimaryOutcome::Advanced);
            assert!(w.is_final_step());
            assert_eq!(w.primary(), PrimaryOutcome::Submit);
        }

        #[test]
        fn test_primary_label_tracks_step() {
            let mut w = wizard();
            assert_eq!(w.primary_label(), "Next");
            w.model.set_value("name", FieldValue::text("x"));
            w.model.set_value("short_name", FieldValue::text("x"));
            w.model.set_value("description", FieldValue::text("x"));
            w.primary();
            w.primary();
            w.primary();
            assert_eq!(w.primary_label(), "Create Track");
        }
    }
}
