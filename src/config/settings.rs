//! Runtime settings: the config file merged with command-line overrides.

use std::time::Duration;

use crate::config::loader::{validate_url, ConfigError};
use crate::config::types::{Config, DeckKind, Environment, RenderStyle, SpeechConfig};
use crate::model::DraftDefaults;

/// Environment variable selecting the backend when `--env` is absent.
pub const ENV_VAR: &str = "CARDVIEWER_ENV";

/// Values given on the command line. `None` means "use the config file".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub deck: Option<DeckKind>,
    pub style: Option<RenderStyle>,
    pub environment: Option<Environment>,
    pub api_url: Option<String>,
    pub no_speech: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub deck: DeckKind,
    pub style: RenderStyle,
    pub environment: Environment,
    pub api_url: String,
    pub tick_rate: Duration,
    pub speech: SpeechConfig,
    pub draft_defaults: DraftDefaults,
}

impl Settings {
    /// Merge `config` with `overrides`.
    ///
    /// Environment precedence: `--env`, then `env_value` (the contents of
    /// [`ENV_VAR`]), then development. Anything other than a production
    /// value selects development. `--api-url` bypasses the selection.
    pub fn resolve(
        config: Config,
        overrides: Overrides,
        env_value: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let environment = overrides
            .environment
            .or_else(|| env_value.and_then(Environment::parse))
            .unwrap_or_default();

        let api_url = match overrides.api_url {
            Some(url) => {
                validate_url("--api-url", &url)?;
                url
            }
            None => config.api.url_for(environment).to_string(),
        };

        let mut speech = config.speech;
        if overrides.no_speech {
            speech.enabled = false;
        }

        Ok(Self {
            deck: overrides.deck.unwrap_or(config.ui.deck),
            style: overrides.style.unwrap_or(config.ui.style),
            environment,
            api_url,
            tick_rate: Duration::from_millis(config.ui.tick_ms),
            speech,
            draft_defaults: DraftDefaults {
                placeholder_image_url: config.words.placeholder_image_url,
            },
        })
    }
}
