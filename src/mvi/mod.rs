//! Model-View-Intent (MVI) primitives shared by every controller.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: snapshot the render collaborator reads
//! - **Intent**: user action or completed fetch
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Controllers own a state value, feed intents through their reducer and run
//! side effects (submission, diagnostics) only after the reducer returns.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
