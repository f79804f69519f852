use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Typed character or pasted text, appended to the focused field.
    Insert(String),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Jump to a field (e.g. the first missing required one).
    FocusField(usize),
    /// Empty every field and focus the first. Sent after a successful create.
    Clear,
}

impl Intent for FormIntent {}
