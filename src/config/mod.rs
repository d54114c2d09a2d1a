//! Configuration: load policy, simulated latency and form declarations.
//!
//! ```toml
//! [defaults]
//! load_policy = "latest_wins"
//! simulated_latency_ms = 50
//!
//! [[forms.login.fields]]
//! name = "email"
//! rules = [{ kind = "required", message = "Email is required" }]
//! ```

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults};
