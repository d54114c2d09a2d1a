//! Form-level view state.

use crate::mvi::UiState;

use super::field::FieldState;
use super::schema::FormSchema;

/// Where the form is in its submit/reset lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// A valid submit went through. Only `Reset` leaves this phase.
    Submitted,
}

/// Snapshot of every field plus the form-wide flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub(crate) fields: Vec<FieldState>,
    /// Once set, errors show on every field, touched or not.
    pub(crate) submit_attempted: bool,
    pub(crate) phase: FormPhase,
}

impl UiState for FormState {}

impl FormState {
    pub fn new(fields: Vec<FieldState>) -> Self {
        Self {
            fields,
            submit_attempted: false,
            phase: FormPhase::Editing,
        }
    }

    pub fn from_schema(schema: &FormSchema) -> Self {
        Self::new(schema.fields.iter().map(FieldState::from_spec).collect())
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub(crate) fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn success(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// True when every rule of every field passes.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldState::is_valid)
    }

    /// True when the field fails validation and the error should be shown:
    /// the user touched or edited it, or tried to submit the form.
    /// Unknown fields are never invalid.
    pub fn is_invalid(&self, name: &str) -> bool {
        self.field(name).is_some_and(|field| {
            !field.is_valid() && (field.is_touched() || field.is_dirty() || self.submit_attempted)
        })
    }

    /// The error message to display for `name`, if any.
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        if !self.is_invalid(name) {
            return None;
        }
        self.field(name).and_then(FieldState::error_message)
    }

    /// Names of fields currently failing validation, in declaration order.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| !f.is_valid())
            .map(FieldState::name)
            .collect()
    }

    /// Field values in declaration order.
    pub fn values(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|f| (f.name().to_string(), f.value().to_string()))
            .collect()
    }
}
