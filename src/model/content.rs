//! Response shapes and the data handed to the view

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use super::types::{Genre, Item, Review, Video};

pub const MAX_REVIEWS: usize = 2;
pub const MAX_SIMILAR: usize = 6;

/// Any TMDB listing endpoint. `results` is mandatory; its absence is a malformed response.
#[derive(Clone, Debug, Deserialize)]
pub struct ResultsPage<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

impl GenreList {
    pub fn into_map(self) -> HashMap<u32, String> {
        self.genres.into_iter().map(|g| (g.id, g.name)).collect()
    }
}

/// Extended data for the single expanded card
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectedItemDetails {
    pub reviews: Vec<Review>,
    pub videos: Vec<Video>,
    pub similar: Vec<Item>,
}

impl SelectedItemDetails {
    pub fn set_reviews(&mut self, reviews: Vec<Review>) {
        self.reviews = reviews.into_iter().take(MAX_REVIEWS).collect();
    }

    pub fn set_videos(&mut self, videos: Vec<Video>) {
        self.videos = videos.into_iter().filter(Video::is_trailer).collect();
    }

    pub fn set_similar(&mut self, similar: Vec<Item>) {
        self.similar = similar.into_iter().take(MAX_SIMILAR).collect();
    }

    pub fn trailer(&self) -> Option<&Video> {
        self.videos.first()
    }
}

/// Snapshot of everything the view needs to draw the list
#[derive(Clone, Debug, Default)]
pub struct Listing {
    pub header: String,
    pub items: Arc<Vec<Item>>,
    pub genres: Arc<HashMap<u32, String>>,
    pub expanded: Option<u64>,
    pub details: SelectedItemDetails,
    pub details_loading: bool,
    pub is_loading: bool,
}

impl Listing {
    /// Comma-separated genre names for an item; ids missing from the map render as "Unknown"
    pub fn genre_labels(&self, item: &Item) -> String {
        if item.genre_ids.is_empty() {
            return "Unknown".to_string();
        }
        item.genre_ids
            .iter()
            .map(|id| self.genres.get(id).map(String::as_str).unwrap_or("Unknown"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
