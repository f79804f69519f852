//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use cardviewer::model::{CardRecord, DraftDefaults};
use cardviewer::speech::Speaker;
use cardviewer::ui::app::App;
use cardviewer::ui::events::{AppEvent, EventHandler};
use cardviewer::ui::runtime::apply_event;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Speaker that records what it was asked to say.
#[derive(Default)]
pub struct RecordingSpeaker {
    pub spoken: Mutex<Vec<String>>,
}

impl Speaker for RecordingSpeaker {
    fn speak(&self, text: &str) {
        self.spoken.lock().push(text.to_string());
    }
}

pub fn app_with_speaker<R: CardRecord>(speaker: Arc<dyn Speaker>) -> App<R> {
    App::new(DraftDefaults::default(), speaker)
}

/// Apply queued events to `app` until `done` holds or `timeout` passes.
pub fn pump_until<R: CardRecord>(
    app: &mut App<R>,
    events: &EventHandler<R>,
    timeout: Duration,
    mut done: impl FnMut(&App<R>) -> bool,
) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if done(app) {
            return true;
        }
        if let Ok(event) = events.next(Duration::from_millis(20)) {
            apply_event(app, event);
        }
    }
    done(app)
}

/// Collect whatever store events arrive within `window`.
pub fn drain<R: CardRecord>(events: &EventHandler<R>, window: Duration) -> Vec<AppEvent<R>> {
    let start = Instant::now();
    let mut seen = Vec::new();
    while start.elapsed() < window {
        if let Ok(event) = events.next(Duration::from_millis(10)) {
            seen.push(event);
        }
    }
    seen
}
