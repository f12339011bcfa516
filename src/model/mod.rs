//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (movies, reviews, videos, UI state)
//! - `content`: Response shapes, expanded-card details and the view snapshot
//! - `error`: Data source error taxonomy
//! - `source`: The `MovieSource` trait the controllers fetch through
//! - `tmdb_client`: TMDB implementation of `MovieSource`
//! - `app_state`: Catalogue state (results, page cursors, fetch guard, expansion)
//! - `app_model`: Main application model owning the state handles

mod types;
mod content;
mod error;
mod source;
mod tmdb_client;
mod app_state;
mod app_model;

pub use types::{ActiveSection, Item, Mode, Review, UiState, Video};

pub use content::Listing;

pub use error::ApiError;

pub use source::MovieSource;

pub use tmdb_client::{poster_url, TmdbClient, POSTER_SIZE};

pub use app_state::{Expansion, BROWSE_HEADER};

pub use app_model::AppModel;
