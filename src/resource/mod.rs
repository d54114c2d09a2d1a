//! Asynchronous load/success/error state.
//!
//! ```text
//! Idle ──load──→ Loading ──ok──→ Success(T)
//!   ↑               └────err──→ Failure(ErrorInfo)
//!   └─clear── any        Success/Failure ──load──→ Loading
//! ```
//!
//! No retries happen here; a caller retries by loading again.

mod controller;
mod error;
mod intent;
mod reducer;
mod state;

pub use controller::{AsyncResource, Completion, LoadPolicy, LoadTicket, SharedResource};
pub use error::{ErrorInfo, LoadError, NOT_FOUND};
pub use intent::ResourceIntent;
pub use reducer::ResourceReducer;
pub use state::ResourceStatus;
