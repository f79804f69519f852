use serde::{Deserialize, Deserializer, Serialize};

use super::{value_at, CardLine, CardRecord, DraftDefaults, FieldSpec};

pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Vocabulary entry with an illustration and its grapheme breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordCard {
    pub original_word: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub category: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub image_url: String,
    /// Stored as `TEXT[]` server-side; older rows carry a plain string.
    #[serde(default, deserialize_with = "graphemes")]
    pub graphemes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordDraft {
    pub original_word: String,
    pub category: String,
    pub image_url: String,
    pub graphemes: Option<String>,
}

const FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        label: "Word",
        required: true,
    },
    FieldSpec {
        label: "Category",
        required: true,
    },
    FieldSpec {
        label: "Image URL",
        required: false,
    },
    FieldSpec {
        label: "Graphemes",
        required: false,
    },
];

impl CardRecord for WordCard {
    type Draft = WordDraft;

    const RESOURCE: &'static str = "words";
    const TITLE: &'static str = "Words";
    const EMPTY_MESSAGE: &'static str = "No words yet. Add your first one above!";
    const NOUN: &'static str = "Word";

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn draft(values: &[String], defaults: &DraftDefaults) -> Self::Draft {
        let image_url = value_at(values, 2);
        let graphemes = value_at(values, 3);
        WordDraft {
            original_word: value_at(values, 0),
            category: value_at(values, 1),
            image_url: if image_url.trim().is_empty() {
                defaults.placeholder_image_url.clone()
            } else {
                image_url
            },
            graphemes: if graphemes.trim().is_empty() {
                None
            } else {
                Some(graphemes)
            },
        }
    }

    fn front(&self) -> Vec<CardLine> {
        let mut lines = vec![
            CardLine::new("Word", self.original_word.as_str()),
            CardLine::new("Category", self.category.as_str()),
        ];
        if let Some(graphemes) = &self.graphemes {
            lines.push(CardLine::new("Graphemes", graphemes.as_str()));
        }
        if !self.image_url.is_empty() {
            lines.push(CardLine::new("Image", self.image_url.as_str()));
        }
        lines
    }

    fn speech_text(&self) -> Option<&str> {
        Some(self.original_word.as_str())
    }

    fn is_revealable() -> bool {
        false
    }

    fn is_speakable() -> bool {
        true
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GraphemesWire {
    Text(String),
    Parts(Vec<String>),
}

fn graphemes<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = Option::<GraphemesWire>::deserialize(deserializer)?;
    Ok(wire.map(|wire| match wire {
        GraphemesWire::Text(text) => text,
        GraphemesWire::Parts(parts) => parts.join(" "),
    }))
}
