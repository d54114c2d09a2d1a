//! Load controller with sequence-tagged requests.
//!
//! Every [`begin_load`](AsyncResource::begin_load) hands out a [`LoadTicket`]
//! numbered from a per-resource counter. Only the ticket of the latest
//! request may settle the resource; anything else is reported as
//! [`Completion::Stale`] and dropped.
//!
//! A `load()` future dropped before its operation settles gives its ticket
//! back through [`abandon`](AsyncResource::abandon), so the next `load()` is
//! never refused because of it.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use scopeguard::ScopeGuard;
use serde::{Deserialize, Serialize};

use crate::mvi::Reducer;

use super::error::{ErrorInfo, LoadError};
use super::intent::ResourceIntent;
use super::reducer::ResourceReducer;
use super::state::ResourceStatus;

/// What to do with `load()` while a request is already outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Refuse the new load with [`LoadError::Busy`].
    #[default]
    RejectWhileLoading,
    /// Start the new load; the older request's completion becomes stale.
    LatestWins,
}

/// Proof that a request was issued, needed to settle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
}

impl LoadTicket {
    pub fn seq(self) -> u64 {
        self.seq
    }
}

/// Whether a completion changed the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// Superseded or cleared before it settled; discarded.
    Stale,
}

pub struct AsyncResource<T> {
    status: ResourceStatus<T>,
    policy: LoadPolicy,
    last_seq: u64,
    in_flight: Option<u64>,
    /// Status shown before the outstanding request started.
    before_load: ResourceStatus<T>,
}

impl<T: Clone + PartialEq + Send + 'static> Default for AsyncResource<T> {
    fn default() -> Self {
        Self::new(LoadPolicy::default())
    }
}

impl<T: Clone + PartialEq + Send + 'static> AsyncResource<T> {
    pub fn new(policy: LoadPolicy) -> Self {
        Self {
            status: ResourceStatus::Idle,
            policy,
            last_seq: 0,
            in_flight: None,
            before_load: ResourceStatus::Idle,
        }
    }

    pub fn status(&self) -> &ResourceStatus<T> {
        &self.status
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Sequence number of the outstanding request, if any.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn has_error(&self) -> bool {
        self.status.has_error()
    }

    pub fn has_data(&self) -> bool {
        self.status.has_data()
    }

    pub fn data(&self) -> Option<&T> {
        self.status.data()
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.status.error()
    }

    /// Move to `Loading` and issue a ticket for the new request.
    ///
    /// # Errors
    /// Returns [`LoadError::Busy`] when a request is outstanding and the
    /// policy is [`LoadPolicy::RejectWhileLoading`]. State is unchanged on error.
    pub fn begin_load(&mut self) -> Result<LoadTicket, LoadError> {
        if let Some(in_flight) = self.in_flight {
            match self.policy {
                LoadPolicy::RejectWhileLoading => {
                    tracing::debug!(in_flight, "Load rejected: request outstanding");
                    return Err(LoadError::Busy { in_flight });
                }
                LoadPolicy::LatestWins => {
                    tracing::debug!(superseded = in_flight, "Superseding outstanding load");
                }
            }
        }

        if self.in_flight.is_none() {
            self.before_load = self.status.clone();
        }
        self.last_seq += 1;
        let seq = self.last_seq;
        self.in_flight = Some(seq);
        self.dispatch(ResourceIntent::Started);
        tracing::debug!(seq, "Load started");

        Ok(LoadTicket { seq })
    }

    /// Settle the request identified by `ticket`.
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<T, ErrorInfo>) -> Completion {
        if self.in_flight != Some(ticket.seq) {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.last_seq,
                "Discarding stale completion"
            );
            return Completion::Stale;
        }

        self.in_flight = None;
        self.before_load = ResourceStatus::Idle;
        if let Err(error) = &result {
            tracing::warn!(
                seq = ticket.seq,
                code = error.code.as_deref().unwrap_or("-"),
                message = %error.message,
                "Load failed"
            );
        } else {
            tracing::debug!(seq = ticket.seq, "Load succeeded");
        }
        self.dispatch(ResourceIntent::Finished(result));

        Completion::Applied
    }

    /// Give up the request identified by `ticket` without a result.
    ///
    /// The resource goes back to the status it had before the request
    /// started and accepts new loads again. A ticket that is no longer live
    /// is reported as [`Completion::Stale`].
    pub fn abandon(&mut self, ticket: LoadTicket) -> Completion {
        if self.in_flight != Some(ticket.seq) {
            return Completion::Stale;
        }

        self.in_flight = None;
        let previous = std::mem::take(&mut self.before_load);
        tracing::debug!(seq = ticket.seq, "Load abandoned before it settled");
        self.dispatch(ResourceIntent::Abandoned(previous));

        Completion::Applied
    }

    /// Issue `operation` and settle the resource with its output.
    ///
    /// The operation is only polled when the load is accepted. Dropping the
    /// returned future before it resolves abandons the request.
    pub async fn load<Fut>(&mut self, operation: Fut) -> Result<Completion, LoadError>
    where
        Fut: Future<Output = Result<T, ErrorInfo>>,
    {
        let ticket = self.begin_load()?;
        let guard = scopeguard::guard(self, move |this| {
            this.abandon(ticket);
        });
        let result = operation.await;
        let this = ScopeGuard::into_inner(guard);
        Ok(this.complete(ticket, result))
    }

    /// Back to `Idle`. An outstanding request becomes stale.
    pub fn clear(&mut self) {
        self.in_flight = None;
        self.before_load = ResourceStatus::Idle;
        self.dispatch(ResourceIntent::Cleared);
    }

    /// Replace loaded data with `edit(&data)`. Returns `false` when nothing
    /// is loaded.
    pub fn update_data(&mut self, edit: impl FnOnce(&T) -> T) -> bool {
        let Some(updated) = self.status.data().map(edit) else {
            return false;
        };
        self.dispatch(ResourceIntent::Updated(updated));
        true
    }

    fn dispatch(&mut self, intent: ResourceIntent<T>) {
        let state = std::mem::take(&mut self.status);
        self.status = ResourceReducer::<T>::reduce(state, intent);
    }
}

/// Cloneable handle to one [`AsyncResource`].
///
/// The lock is held only while starting and settling a request, never across
/// the fetch itself, so two loads can overlap on the same timeline and the
/// resource's policy decides which one is live.
pub struct SharedResource<T> {
    inner: Arc<Mutex<AsyncResource<T>>>,
}

impl<T> Clone for SharedResource<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> SharedResource<T> {
    pub fn new(policy: LoadPolicy) -> Self {
        Self {
            inner: Arc::new(Mutex::new(AsyncResource::new(policy))),
        }
    }

    /// Clone of the current status.
    pub fn snapshot(&self) -> ResourceStatus<T> {
        self.inner.lock().status().clone()
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.inner.lock().in_flight()
    }

    pub fn begin_load(&self) -> Result<LoadTicket, LoadError> {
        self.inner.lock().begin_load()
    }

    pub fn complete(&self, ticket: LoadTicket, result: Result<T, ErrorInfo>) -> Completion {
        self.inner.lock().complete(ticket, result)
    }

    pub fn abandon(&self, ticket: LoadTicket) -> Completion {
        self.inner.lock().abandon(ticket)
    }

    /// Same contract as [`AsyncResource::load`]; the lock is released while
    /// `operation` runs.
    pub async fn load<Fut>(&self, operation: Fut) -> Result<Completion, LoadError>
    where
        Fut: Future<Output = Result<T, ErrorInfo>>,
    {
        let ticket = self.begin_load()?;
        let guard = scopeguard::guard(ticket, |ticket| {
            self.abandon(ticket);
        });
        let result = operation.await;
        let ticket = ScopeGuard::into_inner(guard);
        Ok(self.complete(ticket, result))
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn update_data(&self, edit: impl FnOnce(&T) -> T) -> bool {
        self.inner.lock().update_data(edit)
    }
}
