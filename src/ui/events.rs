use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::store::StoreEvent;

pub enum AppEvent<R> {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// Result of a network command.
    Store(StoreEvent<R>),
}

/// Single queue feeding the UI loop: terminal input from a reader thread,
/// store results from the tokio side.
pub struct EventHandler<R> {
    rx: Receiver<AppEvent<R>>,
    tx: mpsc::Sender<AppEvent<R>>,
}

impl<R: Send + 'static> EventHandler<R> {
    /// Queue only; no input thread. Used by tests and headless callers.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { rx, tx }
    }

    pub fn new(tick_rate: Duration) -> Self {
        let handler = Self::detached();
        let event_tx = handler.tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                            Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                            Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                            Ok(_) => None,
                            Err(err) => {
                                tracing::error!("terminal read failed: {}", err);
                                break;
                            }
                        };
                        if let Some(event) = forwarded {
                            if event_tx.send(event).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("terminal poll failed: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        handler
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent<R>, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent<R>> {
        self.tx.clone()
    }
}
