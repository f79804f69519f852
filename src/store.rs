//! Background worker performing reads and creates against the backend.
//!
//! The view never awaits network calls. It sends [`StoreCommand`]s; the
//! worker runs each one on its own task and reports back through the UI
//! event channel as [`StoreEvent`]s. Overlapping fetches are not sequenced:
//! whichever response arrives last is the collection the view ends up with.

use std::marker::PhantomData;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::CardSource;
use crate::model::CardRecord;
use crate::ui::events::AppEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand<D> {
    FetchAll,
    Create(D),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent<R> {
    /// A read succeeded; replaces the collection.
    Fetched(Vec<R>),
    FetchFailed(String),
    /// A create succeeded; a read follows.
    Created,
    CreateFailed(String),
}

pub type StoreSender<R> = mpsc::Sender<StoreCommand<<R as CardRecord>::Draft>>;
pub type StoreReceiver<R> = mpsc::Receiver<StoreCommand<<R as CardRecord>::Draft>>;

/// Capacity of the command channel.
pub const COMMAND_BUFFER: usize = 32;

pub fn channel<R: CardRecord>() -> (StoreSender<R>, StoreReceiver<R>) {
    mpsc::channel(COMMAND_BUFFER)
}

pub struct DataStore<R: CardRecord, S: CardSource<R>> {
    source: Arc<S>,
    events: Sender<AppEvent<R>>,
    _record: PhantomData<fn() -> R>,
}

impl<R: CardRecord, S: CardSource<R>> Clone for DataStore<R, S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            events: self.events.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: CardRecord, S: CardSource<R>> DataStore<R, S> {
    pub fn new(source: Arc<S>, events: Sender<AppEvent<R>>) -> Self {
        Self {
            source,
            events,
            _record: PhantomData,
        }
    }

    /// Consume commands until every sender is dropped.
    pub fn spawn(self, mut commands: StoreReceiver<R>) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(command) = commands.recv().await {
                let store = self.clone();
                tokio::spawn(async move { store.handle(command).await });
            }
            tracing::debug!("store command channel closed");
        })
    }

    pub async fn handle(&self, command: StoreCommand<R::Draft>) {
        match command {
            StoreCommand::FetchAll => self.fetch_all().await,
            StoreCommand::Create(draft) => self.add_item(draft).await,
        }
    }

    /// Read the whole collection. A failure leaves the view's collection as is.
    pub async fn fetch_all(&self) {
        match self.source.list().await {
            Ok(items) => {
                tracing::info!("Fetched {} {}", items.len(), R::RESOURCE);
                self.emit(StoreEvent::Fetched(items));
            }
            Err(err) => {
                tracing::warn!("Error fetching {}: {}", R::RESOURCE, err);
                self.emit(StoreEvent::FetchFailed(format!(
                    "Error fetching {}: {}",
                    R::RESOURCE,
                    err
                )));
            }
        }
    }

    /// Create one record, then re-read the collection. No read on failure.
    pub async fn add_item(&self, draft: R::Draft) {
        match self.source.create(draft).await {
            Ok(()) => {
                tracing::info!("Created one of {}", R::RESOURCE);
                self.emit(StoreEvent::Created);
                self.fetch_all().await;
            }
            Err(err) => {
                tracing::warn!("Error adding to {}: {}", R::RESOURCE, err);
                self.emit(StoreEvent::CreateFailed(format!(
                    "Error adding to {}: {}",
                    R::RESOURCE,
                    err
                )));
            }
        }
    }

    fn emit(&self, event: StoreEvent<R>) {
        if self.events.send(AppEvent::Store(event)).is_err() {
            tracing::trace!("store event dropped (UI gone)");
        }
    }
}
