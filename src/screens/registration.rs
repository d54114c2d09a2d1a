//! Registration form. One message per field; the form is replaced by a
//! confirmation once submitted, until the user asks to register again.

use crate::form::{FieldSpec, FormController, FormSchema, SubmitHandler, SubmitOutcome};
use crate::validation::RuleSpec;

use super::LogSubmission;

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

pub const EMAIL_INVALID: &str = "Please enter a valid email.";
pub const PASSWORD_INVALID: &str = "Password must be at least 8 characters.";

pub const MIN_PASSWORD_LEN: usize = 8;

pub const CONFIRMATION_TITLE: &str = "Registration Successful!";
pub const CONFIRMATION_BODY: &str = "Thank you for registering.";
pub const REGISTER_ANOTHER: &str = "Register Another Account";

/// Text shown in place of the form after a successful registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub title: &'static str,
    pub body: &'static str,
    /// Label of the action bound to [`RegistrationForm::reset_form`].
    pub action: &'static str,
}

pub struct RegistrationForm<H = LogSubmission> {
    form: FormController<H>,
}

impl RegistrationForm<LogSubmission> {
    pub fn new() -> Self {
        Self::with_schema(&Self::schema())
    }

    pub fn with_schema(schema: &FormSchema) -> Self {
        Self::with_handler(schema, LogSubmission::new("registration"))
    }

    pub fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSpec::new(
                EMAIL,
                vec![RuleSpec::required(EMAIL_INVALID), RuleSpec::email(EMAIL_INVALID)],
            ),
            FieldSpec::new(
                PASSWORD,
                vec![
                    RuleSpec::required(PASSWORD_INVALID),
                    RuleSpec::min_length(MIN_PASSWORD_LEN, PASSWORD_INVALID),
                ],
            ),
        ])
    }
}

impl Default for RegistrationForm<LogSubmission> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: SubmitHandler> RegistrationForm<H> {
    pub fn with_handler(schema: &FormSchema, handler: H) -> Self {
        Self {
            form: FormController::from_schema_with_handler(schema, handler),
        }
    }

    pub fn form(&self) -> &FormController<H> {
        &self.form
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.set_value(EMAIL, value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.set_value(PASSWORD, value);
    }

    pub fn blur(&mut self, field: &str) {
        self.form.blur(field);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.form.submit()
    }

    /// The confirmation replaces the form while this is true.
    pub fn is_submitted(&self) -> bool {
        self.form.success()
    }

    pub fn confirmation(&self) -> Option<Confirmation> {
        self.is_submitted().then_some(Confirmation {
            title: CONFIRMATION_TITLE,
            body: CONFIRMATION_BODY,
            action: REGISTER_ANOTHER,
        })
    }

    /// "Register another account": back to an empty form.
    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    pub fn email_error(&self) -> Option<&str> {
        self.form.visible_error(EMAIL)
    }

    pub fn password_error(&self) -> Option<&str> {
        self.form.visible_error(PASSWORD)
    }
}
