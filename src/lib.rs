//! Terminal viewer for a flashcard (or word) deck served over REST.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod speech;
pub mod store;
pub mod ui;
