//! Field validation rules.
//!
//! A rule is a pure predicate plus a message. Fields evaluate their rules in
//! declaration order and report the first failure only. Format and length
//! rules accept an empty value so that an empty field reports just its
//! `required` message.

mod rule;
mod spec;

pub use rule::{is_email, validate, ValidationRule};
pub use spec::RuleSpec;
