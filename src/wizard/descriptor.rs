//! Per-field descriptors and step layout for the stepped configuration forms
//!
//! Every field declares its kind, shape, and serialization rule exactly once
//! here. The editor, the validator, and the payload builder all consume the
//! same descriptor, so there is no runtime probing of value shapes.

use chrono::NaiveDate;

use super::field::{FieldState, FieldValue};
use crate::state::Scope;

/// Editing/validation kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Toggle,
    Date,
    /// Closed set of allowed string values.
    Choice(&'static [&'static str]),
}

/// Whether a field is a bare scalar or a `{value, scope}` tagged setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Bare,
    Tagged(Scope),
}

/// How the field value is emitted into the submission payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializeRule {
    Verbatim,
    /// RFC 3339 timestamp, empty string when unset.
    IsoDate,
    /// Comma-separated text split into an array of trimmed strings.
    CommaList,
}

/// Static description of one wizard field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub shape: FieldShape,
    pub serialize: SerializeRule,
    pub default: FieldValue,
    pub read_only: bool,
}

impl FieldDescriptor {
    pub fn text(name: &'static str, default: &str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            shape: FieldShape::Bare,
            serialize: SerializeRule::Verbatim,
            default: FieldValue::text(default),
            read_only: false,
        }
    }

    /// Text field whose payload form is an array of trimmed entries.
    pub fn comma_list(name: &'static str, default: &str) -> Self {
        Self {
            serialize: SerializeRule::CommaList,
            ..Self::text(name, default)
        }
    }

    pub fn number(name: &'static str, default: i64) -> Self {
        Self {
            name,
            kind: FieldKind::Number,
            shape: FieldShape::Bare,
            serialize: SerializeRule::Verbatim,
            default: FieldValue::number(default),
            read_only: false,
        }
    }

    pub fn toggle(name: &'static str, default: bool) -> Self {
        Self {
            name,
            kind: FieldKind::Toggle,
            shape: FieldShape::Bare,
            serialize: SerializeRule::Verbatim,
            default: FieldValue::Toggle(default),
            read_only: false,
        }
    }

    pub fn date(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Date,
            shape: FieldShape::Bare,
            serialize: SerializeRule::IsoDate,
            default: FieldValue::empty_date(),
            read_only: false,
        }
    }

    pub fn date_with_default(name: &'static str, default: NaiveDate) -> Self {
        Self {
            default: FieldValue::date(default),
            ..Self::date(name)
        }
    }

    pub fn choice(
        name: &'static str,
        options: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            name,
            kind: FieldKind::Choice(options),
            shape: FieldShape::Bare,
            serialize: SerializeRule::Verbatim,
            default: FieldValue::choice(default),
            read_only: false,
        }
    }

    /// Tag the field with a `{value, scope}` shape and default scope.
    pub fn tagged(mut self, scope: Scope) -> Self {
        self.shape = FieldShape::Tagged(scope);
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Initial state for a fresh form.
    pub fn default_state(&self) -> FieldState {
        match self.shape {
            FieldShape::Bare => FieldState::bare(self.default.clone()),
            FieldShape::Tagged(scope) => FieldState::tagged(self.default.clone(), scope),
        }
    }

    /// Human label derived from the field name ("short_acronym" -> "Short Acronym").
    pub fn label(&self) -> String {
        self.name
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One step of a wizard: a title and the fields it edits, in order.
#[derive(Debug, Clone, Copy)]
pub struct StepDefinition {
    pub title: &'static str,
    pub fields: &'static [&'static str],
}

/// The full static layout of one wizard instantiation.
#[derive(Debug, Clone)]
pub struct WizardSchema {
    pub title: &'static str,
    pub fields: Vec<FieldDescriptor>,
    pub steps: Vec<StepDefinition>,
}

impl WizardSchema {
    pub fn descriptor(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn last_step(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_title_cases_words() {
        let field = FieldDescriptor::text("short_acronym", "");
        assert_eq!(field.label(), "Short Acronym");
    }

    #[test]
    fn test_default_state_carries_scope_for_tagged() {
        let field = FieldDescriptor::toggle("bidding_enabled", false).tagged(Scope::Track);
        let state = field.default_state();
        assert_eq!(state.scope, Some(Scope::Track));
        assert_eq!(state.value, FieldValue::Toggle(false));
    }

    #[test]
    fn test_default_state_bare_has_no_scope() {
        let field = FieldDescriptor::text("name", "");
        assert_eq!(field.default_state().scope, None);
    }

    #[test]
    fn test_comma_list_is_text_with_list_rule() {
        let field = FieldDescriptor::comma_list("contact_emails", "");
        assert_eq!(field.kind, FieldKind::Text);
        assert_eq!(field.serialize, SerializeRule::CommaList);
    }
}
