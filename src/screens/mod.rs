//! Concrete screens built on the form, resource and list controllers.
//!
//! Each screen owns its controller exclusively and exposes read-only view
//! accessors plus the mutating operations a presentation layer calls in
//! response to user input. Nothing here renders.

pub mod counter;
pub mod login;
pub mod notifications;
pub mod profile;
pub mod registration;
pub mod user_info;
pub mod users;

use crate::form::SubmitHandler;

/// Default submission side effect: record which form was submitted and
/// which fields it carried. Values are never logged.
#[derive(Debug, Clone, Copy)]
pub struct LogSubmission {
    form: &'static str,
}

impl LogSubmission {
    pub fn new(form: &'static str) -> Self {
        Self { form }
    }
}

impl SubmitHandler for LogSubmission {
    fn on_submit(&mut self, values: &[(String, String)]) {
        let fields: Vec<&str> = values.iter().map(|(name, _)| name.as_str()).collect();
        tracing::info!(form = self.form, ?fields, "Submission accepted");
    }
}
