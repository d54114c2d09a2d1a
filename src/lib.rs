//! View-state controllers for form, list and remote-data screens.
//!
//! The crate holds the state and transition rules a presentation layer
//! reads and drives; it never renders and never talks to a transport
//! directly. Fetching is a capability passed in by the caller.
//!
//! - [`validation`]: predicate + message rules
//! - [`form`]: fields, submit/reset protocol
//! - [`resource`]: idle/loading/success/failure state for one fetch
//! - [`list`]: filterable ordered collections with derived counts
//! - [`screens`]: the concrete screens built from the above

pub mod config;
pub mod form;
pub mod list;
pub mod mvi;
pub mod resource;
pub mod screens;
pub mod telemetry;
pub mod validation;
