use crate::model::CardRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DeckIntent<R: CardRecord> {
    /// A fetch succeeded. Replaces the collection wholesale.
    Loaded { items: Vec<R> },
    Next,
    Prev,
    /// Show or hide the back of the current card.
    ToggleReveal,
}

impl<R: CardRecord> Intent for DeckIntent<R> {}
