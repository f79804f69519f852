use serde::{Deserialize, Serialize};

use super::{value_at, CardLine, CardRecord, DraftDefaults, FieldSpec};

/// Question/answer pair. The backend also returns `id` and `created_at`,
/// which the viewer has no use for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashcardDraft {
    pub question: String,
    pub answer: String,
}

const FIELDS: [FieldSpec; 2] = [
    FieldSpec {
        label: "Question",
        required: true,
    },
    FieldSpec {
        label: "Answer",
        required: true,
    },
];

impl CardRecord for Flashcard {
    type Draft = FlashcardDraft;

    const RESOURCE: &'static str = "flashcards";
    const TITLE: &'static str = "Flashcards";
    const EMPTY_MESSAGE: &'static str = "No flashcards yet. Add your first one above!";
    const NOUN: &'static str = "Flashcard";

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn draft(values: &[String], _defaults: &DraftDefaults) -> Self::Draft {
        FlashcardDraft {
            question: value_at(values, 0),
            answer: value_at(values, 1),
        }
    }

    fn front(&self) -> Vec<CardLine> {
        vec![CardLine::new("Question", self.question.as_str())]
    }

    fn back(&self) -> Vec<CardLine> {
        vec![CardLine::new("Answer", self.answer.as_str())]
    }

    fn is_revealable() -> bool {
        true
    }

    fn is_speakable() -> bool {
        false
    }
}
