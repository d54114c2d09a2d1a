//! User profile screen: pick an email, load the matching profile, edit its
//! active flag locally.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::resource::{
    AsyncResource, Completion, ErrorInfo, LoadError, LoadPolicy, ResourceStatus,
};

pub const NOT_FOUND_MESSAGE: &str = "User not found";
pub const LOADING_MESSAGE: &str = "Loading user data...";
pub const EMPTY_MESSAGE: &str = "No user data available. Enter an email to load a profile.";
pub const NEVER_LOGGED_IN: &str = "Never logged in";

/// Latency of [`MockDirectory::default`].
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    Guest,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Guest => "guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub last_login: Option<NaiveDateTime>,
}

/// Lookup capability for a single profile.
pub trait UserDirectory {
    /// Resolve `email` (already lower-cased) to a profile. An unknown email
    /// is a failure carrying [`ErrorInfo::not_found`].
    fn find_by_email(&self, email: &str) -> impl Future<Output = Result<Profile, ErrorInfo>> + Send;
}

/// In-memory directory with a simulated round trip.
#[derive(Debug, Clone)]
pub struct MockDirectory {
    profiles: Vec<Profile>,
    latency: Duration,
}

impl MockDirectory {
    pub fn new(profiles: Vec<Profile>, latency: Duration) -> Self {
        Self { profiles, latency }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new(seed_profiles(), DEFAULT_LATENCY)
    }
}

impl UserDirectory for MockDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Profile, ErrorInfo> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.profiles
            .iter()
            .find(|p| p.email == email)
            .cloned()
            .ok_or_else(|| ErrorInfo::not_found(NOT_FOUND_MESSAGE))
    }
}

fn login_at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, min, 0)
}

/// John (active admin), Jane (inactive user), Bob (active guest, never logged in).
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: 1,
            name: "John Admin".into(),
            email: "john@example.com".into(),
            role: Role::Admin,
            is_active: true,
            last_login: login_at(2024, 1, 15, 10, 30),
        },
        Profile {
            id: 2,
            name: "Jane User".into(),
            email: "jane@example.com".into(),
            role: Role::User,
            is_active: false,
            last_login: login_at(2024, 1, 10, 14, 20),
        },
        Profile {
            id: 3,
            name: "Bob Guest".into(),
            email: "bob@example.com".into(),
            role: Role::Guest,
            is_active: true,
            last_login: None,
        },
    ]
}

/// Format a login timestamp as `Jan 15, 2024, 10:30 AM`.
pub fn format_date(at: &NaiveDateTime) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("no email selected")]
    NoSelection,

    #[error(transparent)]
    Load(#[from] LoadError),
}

pub struct UserProfileScreen<D> {
    directory: D,
    selected_email: String,
    profile: AsyncResource<Profile>,
}

impl<D: UserDirectory> UserProfileScreen<D> {
    pub fn new(directory: D) -> Self {
        Self::with_policy(directory, LoadPolicy::default())
    }

    pub fn with_policy(directory: D, policy: LoadPolicy) -> Self {
        Self {
            directory,
            selected_email: String::new(),
            profile: AsyncResource::new(policy),
        }
    }

    pub fn select(&mut self, email: impl Into<String>) {
        self.selected_email = email.into();
    }

    pub fn selected_email(&self) -> &str {
        &self.selected_email
    }

    /// The load button is enabled only with a selection and no load running.
    pub fn can_load(&self) -> bool {
        !self.selected_email.is_empty() && !self.profile.is_loading()
    }

    /// Look up the selected email, case-insensitively.
    ///
    /// # Errors
    /// [`ProfileError::NoSelection`] when nothing is selected, or
    /// [`ProfileError::Load`] when a lookup is already running.
    pub async fn load_selected(&mut self) -> Result<Completion, ProfileError> {
        if self.selected_email.is_empty() {
            return Err(ProfileError::NoSelection);
        }
        let email = self.selected_email.to_lowercase();
        let completion = self
            .profile
            .load(self.directory.find_by_email(&email))
            .await?;
        Ok(completion)
    }

    /// Drop the profile, any error and the selection.
    pub fn clear(&mut self) {
        self.profile.clear();
        self.selected_email.clear();
    }

    /// Flip the loaded profile's active flag. No-op without a profile.
    pub fn toggle_status(&mut self) -> bool {
        self.profile.update_data(|p| Profile {
            is_active: !p.is_active,
            ..p.clone()
        })
    }

    pub fn status(&self) -> &ResourceStatus<Profile> {
        self.profile.status()
    }

    pub fn current_user(&self) -> Option<&Profile> {
        self.profile.data()
    }

    pub fn is_loading(&self) -> bool {
        self.profile.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.profile.status().error_message()
    }

    pub fn loading_message(&self) -> Option<&'static str> {
        self.is_loading().then_some(LOADING_MESSAGE)
    }

    /// Placeholder shown when there is no profile, no load and no error.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.profile.status().is_idle().then_some(EMPTY_MESSAGE)
    }

    pub fn user_role(&self) -> Option<Role> {
        self.current_user().map(|p| p.role)
    }

    pub fn is_user_active(&self) -> bool {
        self.current_user().is_some_and(|p| p.is_active)
    }

    pub fn has_admin_privileges(&self) -> bool {
        self.user_role() == Some(Role::Admin)
    }

    pub fn status_label(&self) -> Option<&'static str> {
        self.current_user()
            .map(|p| if p.is_active { "Active User" } else { "Inactive User" })
    }

    /// Label of the toggle button; the button is disabled without a profile.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_user_active() {
            "Deactivate User"
        } else {
            "Activate User"
        }
    }

    pub fn last_login_text(&self) -> Option<String> {
        self.current_user().map(|p| match &p.last_login {
            Some(at) => format!("Last login: {}", format_date(at)),
            None => NEVER_LOGGED_IN.to_string(),
        })
    }

    /// Greeting for active users who have logged in before.
    pub fn welcome_message(&self) -> Option<String> {
        self.current_user()
            .filter(|p| p.is_active && p.last_login.is_some())
            .map(|p| format!("Welcome back, {}!", p.name))
    }
}
