use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormPhase, FormState};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetValue { field, value } => {
                if let Some(field) = state.field_mut(&field) {
                    field.value = value;
                    field.dirty = true;
                }
                state
            }
            FormIntent::Blur { field } => {
                if let Some(field) = state.field_mut(&field) {
                    field.touched = true;
                }
                state
            }
            FormIntent::Submit => match state.phase {
                FormPhase::Submitted => state,
                FormPhase::Editing => {
                    state.submit_attempted = true;
                    if state.is_valid() {
                        state.phase = FormPhase::Submitted;
                    }
                    state
                }
            },
            FormIntent::Reset => {
                for field in &mut state.fields {
                    field.reset();
                }
                state.submit_attempted = false;
                state.phase = FormPhase::Editing;
                state
            }
        }
    }
}
