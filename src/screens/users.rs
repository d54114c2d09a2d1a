//! User directory screen: one fetch on init, then a list, a spinner or a
//! generic failure message.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::resource::{AsyncResource, Completion, ErrorInfo, LoadError, LoadPolicy, ResourceStatus};

pub const LOADING_MESSAGE: &str = "Loading users...";
pub const ERROR_MESSAGE: &str = "Failed to load users. Please try again later.";

const AVATAR_BASE: &str = "https://i.pravatar.cc/70";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn avatar_url(&self) -> String {
        format!("{AVATAR_BASE}?u={}", self.id)
    }
}

/// Fetch capability for the user collection. Transport is the
/// implementor's business.
pub trait UserService {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, ErrorInfo>> + Send;
}

/// Decode a JSON response body into users.
pub fn parse_users(body: &str) -> Result<Vec<User>, ErrorInfo> {
    serde_json::from_str(body)
        .map_err(|e| ErrorInfo::with_code(format!("Malformed user list: {e}"), "decode"))
}

/// In-memory service answering with a canned JSON body after a delay.
#[derive(Debug, Clone)]
pub struct JsonUserService {
    response: Result<String, ErrorInfo>,
    latency: Duration,
}

impl JsonUserService {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            response: Ok(body.into()),
            latency: Duration::ZERO,
        }
    }

    pub fn failing(error: ErrorInfo) -> Self {
        Self {
            response: Err(error),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl UserService for JsonUserService {
    async fn fetch_users(&self) -> Result<Vec<User>, ErrorInfo> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match &self.response {
            Ok(body) => parse_users(body),
            Err(error) => Err(error.clone()),
        }
    }
}

/// What the screen currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserListView<'a> {
    NotLoaded,
    Loading(&'static str),
    Failed(&'static str),
    Users(&'a [User]),
}

pub struct UserListScreen<S> {
    service: S,
    users: AsyncResource<Vec<User>>,
}

impl<S: UserService> UserListScreen<S> {
    pub fn new(service: S) -> Self {
        Self::with_policy(service, LoadPolicy::default())
    }

    pub fn with_policy(service: S, policy: LoadPolicy) -> Self {
        Self {
            service,
            users: AsyncResource::new(policy),
        }
    }

    /// Fetch the user list. Calling again after a failure retries.
    pub async fn init(&mut self) -> Result<Completion, LoadError> {
        self.users.load(self.service.fetch_users()).await
    }

    pub fn status(&self) -> &ResourceStatus<Vec<User>> {
        self.users.status()
    }

    pub fn view(&self) -> UserListView<'_> {
        match self.users.status() {
            ResourceStatus::Idle => UserListView::NotLoaded,
            ResourceStatus::Loading => UserListView::Loading(LOADING_MESSAGE),
            ResourceStatus::Failure(_) => UserListView::Failed(ERROR_MESSAGE),
            ResourceStatus::Success(users) => UserListView::Users(users),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.users.is_loading()
    }

    /// Generic message for the user; the detail went to the log.
    pub fn error_message(&self) -> Option<&'static str> {
        self.users.has_error().then_some(ERROR_MESSAGE)
    }

    /// Loaded users, empty unless the last load succeeded.
    pub fn users(&self) -> &[User] {
        self.users.data().map(Vec::as_slice).unwrap_or_default()
    }
}
