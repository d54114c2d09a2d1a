//! Click counter.

use crate::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn title(&self) -> String {
        format!("Counter: {}", self.count)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum CounterIntent {
    Increment,
    Decrement,
}

impl Intent for CounterIntent {}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                count: state.count.saturating_add(1),
            },
            CounterIntent::Decrement => CounterState {
                count: state.count.saturating_sub(1),
            },
        }
    }
}
