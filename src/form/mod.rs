//! Validation-driven form state.
//!
//! ```text
//! Editing ──submit, valid──→ Submitted ──reset──→ Editing
//!    │
//!    └──submit, invalid──→ Editing (errors visible on every field)
//! ```

mod controller;
mod field;
mod intent;
mod reducer;
mod schema;
mod state;

pub use controller::{FormController, NoopSubmit, SubmitHandler, SubmitOutcome};
pub use field::{FieldSpec, FieldState};
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use schema::{FormSchema, SchemaError};
pub use state::{FormPhase, FormState};
