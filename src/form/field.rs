//! Per-input tracking record.

use serde::{Deserialize, Serialize};

use crate::validation::{validate, RuleSpec, ValidationRule};

/// Declarative description of one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    /// Value restored on reset.
    #[serde(default)]
    pub initial: String,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, rules: Vec<RuleSpec>) -> Self {
        Self {
            name: name.into(),
            initial: String::new(),
            rules,
        }
    }
}

/// Value, interaction flags and rules of a single input.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    name: String,
    pub(crate) value: String,
    initial: String,
    /// User left the field at least once.
    pub(crate) touched: bool,
    /// Value was edited at least once.
    pub(crate) dirty: bool,
    rules: Vec<ValidationRule>,
}

impl FieldState {
    pub fn new(name: impl Into<String>, rules: Vec<ValidationRule>) -> Self {
        Self::with_initial(name, String::new(), rules)
    }

    pub fn with_initial(
        name: impl Into<String>,
        initial: impl Into<String>,
        rules: Vec<ValidationRule>,
    ) -> Self {
        let initial = initial.into();
        Self {
            name: name.into(),
            value: initial.clone(),
            initial,
            touched: false,
            dirty: false,
            rules,
        }
    }

    pub fn from_spec(spec: &FieldSpec) -> Self {
        Self::with_initial(
            spec.name.as_str(),
            spec.initial.as_str(),
            spec.rules.iter().map(ValidationRule::from).collect(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// Message of the first failing rule, regardless of whether the user
    /// has interacted with the field yet.
    pub fn error_message(&self) -> Option<&str> {
        validate(&self.rules, &self.value)
    }

    pub fn is_valid(&self) -> bool {
        self.error_message().is_none()
    }

    /// Restore the initial value and clear interaction flags.
    pub(crate) fn reset(&mut self) {
        self.value.clone_from(&self.initial);
        self.touched = false;
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_field() -> FieldState {
        FieldState::new(
            "email",
            vec![
                ValidationRule::required("Email is required"),
                ValidationRule::email("Please enter a valid email address"),
            ],
        )
    }

    #[test]
    fn new_field_is_pristine_and_empty() {
        let field = email_field();
        assert_eq!(field.value(), "");
        assert!(!field.is_touched());
        assert!(!field.is_dirty());
    }

    #[test]
    fn empty_value_reports_required_only() {
        assert_eq!(email_field().error_message(), Some("Email is required"));
    }

    #[test]
    fn reset_restores_initial_value() {
        let mut field = FieldState::with_initial("name", "Alice", Vec::new());
        field.value = "Bob".into();
        field.touched = true;
        field.dirty = true;

        field.reset();

        assert_eq!(field.value(), "Alice");
        assert!(!field.is_touched());
        assert!(!field.is_dirty());
    }

    #[test]
    fn from_spec_uses_initial_and_rules() {
        let spec = FieldSpec {
            name: "password".into(),
            initial: "abc".into(),
            rules: vec![RuleSpec::min_length(6, "too short")],
        };
        let field = FieldState::from_spec(&spec);
        assert_eq!(field.value(), "abc");
        assert_eq!(field.error_message(), Some("too short"));
    }
}
