use crate::model::CardRecord;
use crate::ui::mvi::UiState;

/// The collection and the position within it.
///
/// `index < items.len()` whenever `items` is non-empty; with no items the
/// index stays 0 and is not meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckState<R> {
    pub(super) items: Vec<R>,
    pub(super) index: usize,
    pub(super) revealed: bool,
}

impl<R> Default for DeckState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: 0,
            revealed: false,
        }
    }
}

impl<R: CardRecord> UiState for DeckState<R> {}

impl<R: CardRecord> DeckState<R> {
    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn current(&self) -> Option<&R> {
        self.items.get(self.index)
    }

    /// 1-based position and total, for "(2/5)" style headings.
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            None
        } else {
            Some((self.index + 1, self.items.len()))
        }
    }
}
