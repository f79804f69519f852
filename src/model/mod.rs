//! Record shapes served by the backend and the trait the view is generic over.
//!
//! A deck is either a list of [`Flashcard`]s or a list of [`WordCard`]s, never
//! both. Everything above this module (store, reducers, renderer) only talks
//! to [`CardRecord`].

mod flashcard;
mod word;

pub use flashcard::{Flashcard, FlashcardDraft};
pub use word::{WordCard, WordDraft, DEFAULT_PLACEHOLDER_IMAGE_URL};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// One input of the add-form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub required: bool,
}

/// A labelled line shown on a card face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    pub label: &'static str,
    pub value: String,
}

impl CardLine {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Client-side defaults applied when turning form values into a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftDefaults {
    pub placeholder_image_url: String,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        Self {
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }
}

/// A record the viewer can list, display and create.
pub trait CardRecord:
    Debug + Clone + PartialEq + Default + DeserializeOwned + Send + Sync + 'static
{
    /// Body of the create request.
    type Draft: Serialize + Debug + Clone + PartialEq + Send + Sync + 'static;

    /// Path segment of the REST resource (`GET/POST {API_URL}/{RESOURCE}`).
    const RESOURCE: &'static str;

    /// Heading shown above the deck.
    const TITLE: &'static str;

    /// Shown in empty-state under the form.
    const EMPTY_MESSAGE: &'static str;

    /// Singular name of one record ("Flashcard", "Word").
    const NOUN: &'static str;

    /// Form inputs, in display order.
    fn form_fields() -> &'static [FieldSpec];

    /// Builds the create body from form values (one per `form_fields()` entry).
    fn draft(values: &[String], defaults: &DraftDefaults) -> Self::Draft;

    /// Lines always visible.
    fn front(&self) -> Vec<CardLine>;

    /// Lines hidden until revealed. Empty when the record has no back side.
    fn back(&self) -> Vec<CardLine> {
        Vec::new()
    }

    /// Text handed to the speech engine, if this kind supports pronunciation.
    fn speech_text(&self) -> Option<&str> {
        None
    }

    fn is_revealable() -> bool;

    fn is_speakable() -> bool;
}

/// Index of the first required field whose value is blank.
pub fn first_missing_field<R: CardRecord>(values: &[String]) -> Option<usize> {
    R::form_fields()
        .iter()
        .enumerate()
        .find(|(idx, spec)| {
            spec.required
                && values
                    .get(*idx)
                    .map(|value| value.trim().is_empty())
                    .unwrap_or(true)
        })
        .map(|(idx, _)| idx)
}

fn value_at(values: &[String], idx: usize) -> String {
    values.get(idx).cloned().unwrap_or_default()
}
