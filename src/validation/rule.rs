//! Validation rules: a predicate paired with the message shown when it fails.

use std::fmt;
use std::sync::Arc;

type PredicateFn = dyn Fn(&str) -> bool + Send + Sync;

/// A stateless check applied to a field value.
///
/// Rules are cheap to clone and can be shared between fields. Two rules are
/// equal when they share the same predicate and carry the same message.
#[derive(Clone)]
pub struct ValidationRule {
    predicate: Arc<PredicateFn>,
    message: String,
}

impl ValidationRule {
    /// Create a rule from an arbitrary predicate. The rule passes when the
    /// predicate returns `true`.
    pub fn new<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Fails on an empty value.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(message, |value| !value.is_empty())
    }

    /// Fails when a non-empty value is not shaped like `local@domain.tld`.
    pub fn email(message: impl Into<String>) -> Self {
        Self::new(message, |value| value.is_empty() || is_email(value))
    }

    /// Fails when a non-empty value has fewer than `min` characters.
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::new(message, move |value| {
            value.is_empty() || value.chars().count() >= min
        })
    }

    /// Fails when the value has more than `max` characters.
    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::new(message, move |value| value.chars().count() <= max)
    }

    /// Returns `true` when `value` satisfies the rule.
    pub fn check(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PartialEq for ValidationRule {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate) && self.message == other.message
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Message of the first failing rule, in declaration order.
pub fn validate<'a>(rules: &'a [ValidationRule], value: &str) -> Option<&'a str> {
    rules
        .iter()
        .find(|rule| !rule.check(value))
        .map(ValidationRule::message)
}

/// Equivalent of `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
