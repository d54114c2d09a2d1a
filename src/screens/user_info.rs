//! Greeting card for a named user.

/// Shows a greeting for whichever user is currently set. The message is
/// derived on every read, so it follows user changes without extra bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserInfo {
    name: String,
}

impl UserInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn set_user(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Welcome, {name}!`, or nothing while no user is set.
    pub fn welcome_message(&self) -> Option<String> {
        let name = self.name.trim();
        (!name.is_empty()).then(|| format!("Welcome, {name}!"))
    }
}
