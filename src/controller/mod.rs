//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and drives every fetch against the
//! movie source. It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `pagination`: Guarded fetch-and-append of listing pages
//! - `query`: Browse/search mode switching and the debounced search input
//! - `details`: Single expanded card and its detail fetches
//! - `debounce`: Single-slot cancellable delay timer

mod input;
mod pagination;
mod query;
mod details;
mod debounce;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::model::{AppModel, Mode, MovieSource};

use debounce::Debouncer;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
    pub(crate) source: Arc<dyn MovieSource>,
    search_debounce: Arc<Mutex<Debouncer>>,
    scroll_threshold: usize,
}

impl AppController {
    pub fn new(model: Arc<AppModel>, source: Arc<dyn MovieSource>, config: &Config) -> Self {
        Self {
            model,
            source,
            search_debounce: Arc::new(Mutex::new(Debouncer::new(config.debounce))),
            scroll_threshold: config.scroll_threshold,
        }
    }

    /// Load the genre map (best effort) and the first page of "now playing"
    pub async fn initialize(&self) {
        match self.source.genres().await {
            Ok(genres) => {
                tracing::info!(count = genres.len(), "Genres loaded");
                self.model.state().await.genres = Arc::new(genres);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load genres, labels will show as unknown");
            }
        }

        self.load_next_page(Mode::Browse).await;
    }
}
