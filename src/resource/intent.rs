use crate::mvi::Intent;

use super::error::ErrorInfo;
use super::state::ResourceStatus;

#[derive(Debug, Clone)]
pub enum ResourceIntent<T> {
    /// A request went out.
    Started,
    /// The live request settled.
    Finished(Result<T, ErrorInfo>),
    /// Loaded data was edited locally.
    Updated(T),
    /// Drop data and error, back to idle.
    Cleared,
    /// The live request was given up before it settled; go back to what was
    /// shown before it started.
    Abandoned(ResourceStatus<T>),
}

impl<T: Send + 'static> Intent for ResourceIntent<T> {}
