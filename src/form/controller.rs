//! Form controller: owns a [`FormState`] and runs the submission side effect.

use crate::mvi::Reducer;

use super::field::FieldState;
use super::intent::FormIntent;
use super::reducer::FormReducer;
use super::schema::FormSchema;
use super::state::{FormPhase, FormState};

/// Receives the field values of a successful submission.
pub trait SubmitHandler {
    fn on_submit(&mut self, values: &[(String, String)]);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&[(String, String)]),
{
    fn on_submit(&mut self, values: &[(String, String)]) {
        self(values)
    }
}

/// Handler for forms whose submission has no external effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSubmit;

impl SubmitHandler for NoopSubmit {
    fn on_submit(&mut self, _values: &[(String, String)]) {}
}

/// Result of [`FormController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form was valid; the handler ran once.
    Submitted,
    /// Form was invalid; errors are now visible on every field.
    Invalid,
    /// Form was already submitted and has not been reset.
    AlreadySubmitted,
}

impl SubmitOutcome {
    pub fn is_success(self) -> bool {
        self == Self::Submitted
    }
}

pub struct FormController<H = NoopSubmit> {
    state: FormState,
    handler: H,
}

impl FormController<NoopSubmit> {
    pub fn new(fields: Vec<FieldState>) -> Self {
        Self::with_handler(fields, NoopSubmit)
    }

    pub fn from_schema(schema: &FormSchema) -> Self {
        Self::new(FormState::from_schema(schema).fields)
    }
}

impl<H: SubmitHandler> FormController<H> {
    pub fn with_handler(fields: Vec<FieldState>, handler: H) -> Self {
        Self {
            state: FormState::new(fields),
            handler,
        }
    }

    pub fn from_schema_with_handler(schema: &FormSchema, handler: H) -> Self {
        Self {
            state: FormState::from_schema(schema),
            handler,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        if !self.knows(field) {
            return;
        }
        self.dispatch(FormIntent::SetValue {
            field: field.to_string(),
            value: value.into(),
        });
    }

    pub fn blur(&mut self, field: &str) {
        if !self.knows(field) {
            return;
        }
        self.dispatch(FormIntent::Blur {
            field: field.to_string(),
        });
    }

    /// Attempt submission. The handler runs only on the
    /// `Editing -> Submitted` transition.
    pub fn submit(&mut self) -> SubmitOutcome {
        let before = self.state.phase();
        self.dispatch(FormIntent::Submit);

        match (before, self.state.phase()) {
            (FormPhase::Submitted, _) => {
                tracing::debug!("Submit ignored: form already submitted");
                SubmitOutcome::AlreadySubmitted
            }
            (FormPhase::Editing, FormPhase::Submitted) => {
                let values = self.state.values();
                self.handler.on_submit(&values);
                tracing::info!(fields = values.len(), "Form submitted");
                SubmitOutcome::Submitted
            }
            (FormPhase::Editing, FormPhase::Editing) => {
                tracing::debug!(
                    invalid = ?self.state.invalid_fields(),
                    "Submit rejected: form invalid"
                );
                SubmitOutcome::Invalid
            }
        }
    }

    pub fn reset(&mut self) {
        self.dispatch(FormIntent::Reset);
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    pub fn is_invalid(&self, field: &str) -> bool {
        self.state.is_invalid(field)
    }

    /// First failing rule message, shown or not.
    pub fn error_message(&self, field: &str) -> Option<&str> {
        self.state.field(field).and_then(FieldState::error_message)
    }

    /// First failing rule message, only once the field should display it.
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        self.state.visible_error(field)
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.state.field(field).map(FieldState::value)
    }

    pub fn values(&self) -> Vec<(String, String)> {
        self.state.values()
    }

    pub fn submit_attempted(&self) -> bool {
        self.state.submit_attempted()
    }

    pub fn success(&self) -> bool {
        self.state.success()
    }

    fn knows(&self, field: &str) -> bool {
        let known = self.state.field(field).is_some();
        if !known {
            tracing::debug!(field, "Ignoring intent for unknown field");
        }
        known
    }

    fn dispatch(&mut self, intent: FormIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = FormReducer::reduce(state, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationRule;

    fn fields() -> Vec<FieldState> {
        vec![FieldState::new(
            "email",
            vec![
                ValidationRule::required("Email is required"),
                ValidationRule::email("Please enter a valid email address"),
            ],
        )]
    }

    #[test]
    fn handler_runs_once_per_valid_submit() {
        let mut calls = Vec::new();
        let mut form = FormController::with_handler(fields(), |values: &[(String, String)]| {
            calls.push(values.to_vec());
        });
        form.set_value("email", "a@b.com");

        assert_eq!(form.submit(), SubmitOutcome::Submitted);
        assert_eq!(form.submit(), SubmitOutcome::AlreadySubmitted);
        drop(form);

        assert_eq!(calls, vec![vec![("email".to_string(), "a@b.com".to_string())]]);
    }

    #[test]
    fn invalid_submit_never_calls_handler() {
        let mut count = 0;
        let mut form = FormController::with_handler(fields(), |_: &[(String, String)]| count += 1);
        for _ in 0..3 {
            assert_eq!(form.submit(), SubmitOutcome::Invalid);
            assert!(!form.success());
        }
        drop(form);
        assert_eq!(count, 0);
    }

    #[test]
    fn resubmit_after_reset_calls_handler_again() {
        let mut count = 0;
        let mut form = FormController::with_handler(fields(), |_: &[(String, String)]| count += 1);
        form.set_value("email", "a@b.com");
        assert!(form.submit().is_success());
        form.reset();
        form.set_value("email", "c@d.org");
        assert!(form.submit().is_success());
        drop(form);
        assert_eq!(count, 2);
    }

    #[test]
    fn error_message_ignores_visibility() {
        let form = FormController::new(fields());
        assert_eq!(form.error_message("email"), Some("Email is required"));
        assert_eq!(form.visible_error("email"), None);
    }

    #[test]
    fn unknown_field_is_noop() {
        let mut form = FormController::new(fields());
        let before = form.state().clone();
        form.set_value("missing", "x");
        form.blur("missing");
        assert_eq!(form.state(), &before);
        assert_eq!(form.value("missing"), None);
    }
}
