//! Shared test utilities and scripted collaborators.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::future::Future;

use parking_lot::Mutex;
use viewstate::resource::{ErrorInfo, SharedResource};
use viewstate::screens::users::{User, UserService};

/// User service answering with queued responses, one per fetch.
pub struct ScriptedUserService {
    responses: Mutex<VecDeque<Result<Vec<User>, ErrorInfo>>>,
}

impl ScriptedUserService {
    pub fn new(responses: Vec<Result<Vec<User>, ErrorInfo>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().len()
    }
}

impl UserService for ScriptedUserService {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, ErrorInfo>> + Send {
        let next = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ErrorInfo::new("no scripted response left")));
        async move { next }
    }
}

pub fn user(id: u32, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

/// Yield until `resource` has request `seq` outstanding.
pub async fn wait_for_in_flight<T>(resource: &SharedResource<T>, seq: u64)
where
    T: Clone + PartialEq + Send + 'static,
{
    for _ in 0..100 {
        if resource.in_flight() == Some(seq) {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("request #{seq} never started");
}
