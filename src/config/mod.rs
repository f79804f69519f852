mod loader;
mod settings;
mod types;

pub use loader::ConfigError;
pub use settings::{Overrides, Settings, ENV_VAR};
pub use types::{
    ApiConfig, Config, DeckKind, Environment, RenderStyle, SpeechConfig, UiConfig, WordsConfig,
};
