use std::marker::PhantomData;

use crate::mvi::Reducer;

use super::intent::ResourceIntent;
use super::state::ResourceStatus;

/// Reducer for load status transitions.
pub struct ResourceReducer<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Clone + PartialEq + Send + 'static> Reducer for ResourceReducer<T> {
    type State = ResourceStatus<T>;
    type Intent = ResourceIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResourceIntent::Started => ResourceStatus::Loading,

            ResourceIntent::Finished(result) => match state {
                ResourceStatus::Loading => match result {
                    Ok(data) => ResourceStatus::Success(data),
                    Err(error) => ResourceStatus::Failure(error),
                },
                // Only a loading resource can settle
                other => other,
            },

            ResourceIntent::Updated(data) => match state {
                ResourceStatus::Success(_) => ResourceStatus::Success(data),
                other => other,
            },

            ResourceIntent::Cleared => ResourceStatus::Idle,

            ResourceIntent::Abandoned(previous) => match state {
                ResourceStatus::Loading => previous,
                other => other,
            },
        }
    }
}
