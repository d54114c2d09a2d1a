use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::form::FormSchema;
use crate::resource::LoadPolicy;
use crate::screens::login::LoginForm;
use crate::screens::registration::RegistrationForm;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    /// Form declarations keyed by form name ("login", "registration", ...).
    /// Entries here replace the built-in schema of the same name.
    #[serde(default)]
    pub forms: BTreeMap<String, FormSchema>,
}

/// Default settings for resource-backed screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// What to do with a load issued while another is running.
    #[serde(default)]
    pub load_policy: LoadPolicy,
    /// Delay of the in-memory fetch collaborators in milliseconds (default: 100).
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
}

fn default_simulated_latency_ms() -> u64 {
    100
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            load_policy: LoadPolicy::default(),
            simulated_latency_ms: default_simulated_latency_ms(),
        }
    }
}

impl Config {
    /// Schema for `name`: the configured one, else the built-in one.
    pub fn form(&self, name: &str) -> Option<FormSchema> {
        if let Some(schema) = self.forms.get(name) {
            return Some(schema.clone());
        }
        match name {
            "login" => Some(LoginForm::schema()),
            "registration" => Some(RegistrationForm::schema()),
            _ => None,
        }
    }

    pub fn simulated_latency(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.defaults.simulated_latency_ms)
    }
}
