use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_PLACEHOLDER_IMAGE_URL;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub words: WordsConfig,
}

/// The two backend locations; one is picked by [`Environment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Used when running in development (default: http://localhost:8000).
    #[serde(default = "default_development_url")]
    pub development_url: String,
    /// Used when running in production.
    #[serde(default = "default_production_url")]
    pub production_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Which record shape the viewer works with.
    #[serde(default)]
    pub deck: DeckKind,
    /// Render style (default: rich).
    #[serde(default)]
    pub style: RenderStyle,
    /// Input poll / redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Text-to-speech program used to pronounce words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_speech_enabled")]
    pub enabled: bool,
    /// Executable invoked as `{program} -v {language} {word}`.
    #[serde(default = "default_speech_program")]
    pub program: String,
    #[serde(default = "default_speech_language")]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordsConfig {
    /// Sent as `image_url` when the form leaves it blank.
    #[serde(default = "default_placeholder_image_url")]
    pub placeholder_image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeckKind {
    #[default]
    Flashcards,
    Words,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// No borders, no colors.
    Plain,
    /// Bordered blocks.
    Card,
    /// Rounded borders, accent colors.
    #[default]
    Rich,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parses `production`/`prod` and `development`/`dev`, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }
}

impl ApiConfig {
    pub fn url_for(&self, environment: Environment) -> &str {
        match environment {
            Environment::Development => &self.development_url,
            Environment::Production => &self.production_url,
        }
    }
}

fn default_development_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_production_url() -> String {
    "https://reading-backend-qtft.onrender.com".to_string()
}

fn default_tick_ms() -> u64 {
    250
}

fn default_speech_enabled() -> bool {
    true
}

fn default_speech_program() -> String {
    "espeak-ng".to_string()
}

fn default_speech_language() -> String {
    "en-US".to_string()
}

fn default_placeholder_image_url() -> String {
    DEFAULT_PLACEHOLDER_IMAGE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            development_url: default_development_url(),
            production_url: default_production_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            deck: DeckKind::default(),
            style: RenderStyle::default(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_speech_enabled(),
            program: default_speech_program(),
            language: default_speech_language(),
        }
    }
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            placeholder_image_url: default_placeholder_image_url(),
        }
    }
}
