//! Login form: email + password with per-rule messages.

use crate::form::{FieldSpec, FormController, FormSchema, SubmitHandler, SubmitOutcome};
use crate::validation::RuleSpec;

use super::LogSubmission;

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
pub const FORM_ERROR: &str = "Please fix the errors above before submitting";
pub const SUCCESS: &str = "Login successful!";

/// Minimum password length accepted at login.
pub const MIN_PASSWORD_LEN: usize = 6;

pub struct LoginForm<H = LogSubmission> {
    form: FormController<H>,
}

impl LoginForm<LogSubmission> {
    pub fn new() -> Self {
        Self::with_schema(&Self::schema())
    }

    /// Build the form from a schema, e.g. one loaded from config.
    pub fn with_schema(schema: &FormSchema) -> Self {
        Self::with_handler(schema, LogSubmission::new("login"))
    }

    pub fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSpec::new(
                EMAIL,
                vec![
                    RuleSpec::required(EMAIL_REQUIRED),
                    RuleSpec::email(EMAIL_INVALID),
                ],
            ),
            FieldSpec::new(
                PASSWORD,
                vec![
                    RuleSpec::required(PASSWORD_REQUIRED),
                    RuleSpec::min_length(MIN_PASSWORD_LEN, PASSWORD_TOO_SHORT),
                ],
            ),
        ])
    }
}

impl Default for LoginForm<LogSubmission> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: SubmitHandler> LoginForm<H> {
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

    pub fn reset(&mut self) {
        self.form.reset();
    }

    pub fn is_email_invalid(&self) -> bool {
        self.form.is_invalid(EMAIL)
    }

    pub fn is_password_invalid(&self) -> bool {
        self.form.is_invalid(PASSWORD)
    }

    pub fn email_error(&self) -> Option<&str> {
        self.form.visible_error(EMAIL)
    }

    pub fn password_error(&self) -> Option<&str> {
        self.form.visible_error(PASSWORD)
    }

    /// Form-wide banner shown after a rejected submit.
    pub fn form_error(&self) -> Option<&'static str> {
        (self.form.submit_attempted() && !self.form.is_valid()).then_some(FORM_ERROR)
    }

    pub fn success_message(&self) -> Option<&'static str> {
        self.form.success().then_some(SUCCESS)
    }
}
