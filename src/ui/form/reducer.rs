use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::FormState;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Insert(text) => {
                let FormState {
                    mut values,
                    focused,
                } = state;
                if let Some(value) = values.get_mut(focused) {
                    value.extend(text.chars().filter(|ch| !ch.is_control()));
                }
                FormState { values, focused }
            }

            FormIntent::Backspace => {
                let FormState {
                    mut values,
                    focused,
                } = state;
                if let Some(value) = values.get_mut(focused) {
                    value.pop();
                }
                FormState { values, focused }
            }

            FormIntent::FocusNext => {
                let len = state.values.len();
                if len == 0 {
                    return state;
                }
                FormState {
                    focused: (state.focused + 1) % len,
                    ..state
                }
            }

            FormIntent::FocusPrev => {
                let len = state.values.len();
                if len == 0 {
                    return state;
                }
                FormState {
                    focused: (state.focused + len - 1) % len,
                    ..state
                }
            }

            FormIntent::FocusField(idx) => {
                if idx >= state.values.len() {
                    return state;
                }
                FormState {
                    focused: idx,
                    ..state
                }
            }

            FormIntent::Clear => FormState::new(state.values.len()),
        }
    }
}
