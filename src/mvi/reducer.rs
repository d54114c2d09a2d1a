use super::intent::Intent;
use super::state::UiState;

/// The single place a screen's state changes.
///
/// Implementors are stateless: `reduce` takes the old snapshot by value and
/// returns the next one without touching anything else.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Apply `intents` in order, starting from `state`.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
