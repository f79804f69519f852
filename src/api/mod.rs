//! REST access to the flashcard backend.
//!
//! Two verbs per resource are used: `GET {API_URL}/{resource}` for the whole
//! collection and `POST {API_URL}/{resource}` to create one record.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;

use crate::model::CardRecord;
use std::future::Future;

/// Read/create access to one resource of the backend.
pub trait CardSource<R: CardRecord>: Send + Sync + 'static {
    /// Fetch the full collection.
    fn list(&self) -> impl Future<Output = Result<Vec<R>, ApiError>> + Send;

    /// Create one record. The response body is not used.
    fn create(&self, draft: R::Draft) -> impl Future<Output = Result<(), ApiError>> + Send;
}
