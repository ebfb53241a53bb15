//! In-memory form model for the stepped configuration forms

use std::collections::HashMap;

use super::descriptor::WizardSchema;
use super::field::{FieldState, FieldValue};
use crate::state::Scope;

/// Mapping from field name to its current state.
///
/// Created from a schema's defaults (create flows) or populated from a
/// fetched entity (edit flow). A field keeps its bare/tagged shape for the
/// lifetime of the form: `set_value` replaces only the value and preserves
/// the scope tag.
#[derive(Debug, Clone, Default)]
pub struct FormModel {
    fields: HashMap<&'static str, FieldState>,
}

impl FormModel {
    /// Build a model holding every schema field at its default.
    pub fn from_schema(schema: &WizardSchema) -> Self {
        let fields = schema
            .fields
            .iter()
            .map(|desc| (desc.name, desc.default_state()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).map(|f| &f.value)
    }

    pub fn value_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.fields.get_mut(name).map(|f| &mut f.value)
    }

    /// Replace a field's value, keeping its scope tag.
    pub fn set_value(&mut self, name: &'static str, value: FieldValue) {
        match self.fields.get_mut(name) {
            Some(state) => state.value = value,
            None => {
                self.fields.insert(name, FieldState::bare(value));
            }
        }
    }

    /// Retag a tagged field. Bare fields are left untouched.
    pub fn set_scope(&mut self, name: &str, scope: Scope) {
        if let Some(state) = self.fields.get_mut(name) {
            if state.scope.is_some() {
                state.scope = Some(scope);
            }
        }
    }

    /// Install a populated state for one field (edit-flow bootstrap).
    pub fn insert(&mut self, name: &'static str, state: FieldState) {
        self.fields.insert(name, state);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::descriptor::FieldDescriptor;

    fn schema() -> WizardSchema {
        WizardSchema {
            title: "Test",
            fields: vec![
                FieldDescriptor::text("name", ""),
                FieldDescriptor::toggle("bidding_enabled", false).tagged(Scope::Track),
            ],
            steps: vec![],
        }
    }

    #[test]
    fn test_from_schema_installs_defaults() {
        let model = FormModel::from_schema(&schema());
        assert_eq!(model.len(), 2);
        assert_eq!(model.value("name"), Some(&FieldValue::text("")));
        assert_eq!(
            model.get("bidding_enabled").unwrap().scope,
            Some(Scope::Track)
        );
    }

    #[test]
    fn test_set_value_preserves_scope() {
        let mut model = FormModel::from_schema(&schema());
        model.set_value("bidding_enabled", FieldValue::Toggle(true));
        let state = model.get("bidding_enabled").unwrap();
        assert_eq!(state.value, FieldValue::Toggle(true));
        assert_eq!(state.scope, Some(Scope::Track));
    }

    #[test]
    fn test_set_scope_ignores_bare_fields() {
        let mut model = FormModel::from_schema(&schema());
        model.set_scope("name", Scope::Conference);
        assert_eq!(model.get("name").unwrap().scope, None);
    }

    #[test]
    fn test_set_scope_retags_tagged_fields() {
        let mut model = FormModel::from_schema(&schema());
        model.set_scope("bidding_enabled", Scope::Conference);
        assert_eq!(
            model.get("bidding_enabled").unwrap().scope,
            Some(Scope::Conference)
        );
    }

    #[test]
    fn test_missing_field_resolves_to_none() {
        let model = FormModel::from_schema(&schema());
        assert!(model.value("nope").is_none());
    }
}
