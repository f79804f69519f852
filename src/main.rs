use anyhow::Context;
use cardviewer::api::ApiClient;
use cardviewer::config::{
    Config, DeckKind, Environment, Overrides, RenderStyle, Settings, ENV_VAR,
};
use cardviewer::logging::init_tracing;
use cardviewer::model::{CardRecord, Flashcard, WordCard};
use cardviewer::speech::speaker_from_config;
use cardviewer::store::{self, DataStore};
use cardviewer::ui::app::App;
use cardviewer::ui::events::EventHandler;
use cardviewer::ui::runtime;
use cardviewer::ui::theme::Theme;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "cardviewer")]
#[command(about = "Browse and add flashcards from a REST backend")]
struct Cli {
    /// Which collection to browse
    #[arg(long, value_enum)]
    deck: Option<DeckKind>,

    /// Card render style
    #[arg(long, value_enum)]
    style: Option<RenderStyle>,

    /// Backend environment (overrides CARDVIEWER_ENV)
    #[arg(long = "env", value_enum)]
    environment: Option<Environment>,

    /// Backend base URL, bypassing the environment selection
    #[arg(long)]
    api_url: Option<String>,

    /// Config file path (default: ~/.config/cardviewer/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable pronunciation
    #[arg(long)]
    no_speech: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = loaded.unwrap_or_else(|e| fail(e));

    let overrides = Overrides {
        deck: cli.deck,
        style: cli.style,
        environment: cli.environment,
        api_url: cli.api_url,
        no_speech: cli.no_speech,
    };
    let env_value = std::env::var(ENV_VAR).ok();
    let settings =
        Settings::resolve(config, overrides, env_value.as_deref()).unwrap_or_else(|e| fail(e));

    tracing::info!(
        deck = ?settings.deck,
        environment = ?settings.environment,
        api_url = %settings.api_url,
        "starting cardviewer"
    );

    match settings.deck {
        DeckKind::Flashcards => launch::<Flashcard>(settings).await,
        DeckKind::Words => launch::<WordCard>(settings).await,
    }
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}

async fn launch<R: CardRecord>(settings: Settings) -> anyhow::Result<()> {
    let client = ApiClient::new(settings.api_url.clone()).context("building HTTP client")?;
    let events = EventHandler::<R>::new(settings.tick_rate);
    let (store_tx, store_rx) = store::channel::<R>();
    let store_task = DataStore::new(Arc::new(client), events.sender()).spawn(store_rx);

    let mut app = App::<R>::new(
        settings.draft_defaults.clone(),
        speaker_from_config(&settings.speech),
    );
    app.attach_store(store_tx);

    let theme = Theme::for_style(settings.style);
    let tick_rate = settings.tick_rate;
    let result = tokio::task::spawn_blocking(move || runtime::run(app, events, theme, tick_rate))
        .await
        .context("UI thread panicked")?;

    store_task.abort();
    result.context("terminal UI failed")?;
    Ok(())
}
