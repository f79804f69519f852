use std::marker::PhantomData;

use crate::model::CardRecord;
use crate::ui::mvi::Reducer;

use super::intent::DeckIntent;
use super::state::DeckState;

/// Index wraparound and reveal flag.
pub struct DeckReducer<R>(PhantomData<R>);

impl<R: CardRecord> Reducer for DeckReducer<R> {
    type State = DeckState<R>;
    type Intent = DeckIntent<R>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeckIntent::Loaded { items } => {
                // Keep the user's place when it still exists.
                let index = state.index.min(items.len().saturating_sub(1));
                DeckState {
                    items,
                    index,
                    revealed: false,
                }
            }

            DeckIntent::Next => {
                let len = state.items.len();
                if len == 0 {
                    return state;
                }
                DeckState {
                    index: (state.index + 1) % len,
                    revealed: false,
                    ..state
                }
            }

            DeckIntent::Prev => {
                let len = state.items.len();
                if len == 0 {
                    return state;
                }
                DeckState {
                    index: (state.index + len - 1) % len,
                    revealed: false,
                    ..state
                }
            }

            DeckIntent::ToggleReveal => {
                if state.items.is_empty() || !R::is_revealable() {
                    return state;
                }
                DeckState {
                    revealed: !state.revealed,
                    ..state
                }
            }
        }
    }
}
