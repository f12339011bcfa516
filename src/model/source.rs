//! The remote movie catalogue as seen by the controllers

use std::collections::HashMap;

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{Item, Review, Video};

/// Paginated movie catalogue. Every call is fallible and may return empty collections.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// One page of the "now playing" listing
    async fn now_playing(&self, page: u32) -> Result<Vec<Item>, ApiError>;

    /// One page of search results for `query`
    async fn search(&self, query: &str, page: u32) -> Result<Vec<Item>, ApiError>;

    /// Genre id to name mapping
    async fn genres(&self) -> Result<HashMap<u32, String>, ApiError>;

    /// First page of reviews for a movie
    async fn reviews(&self, movie_id: u64) -> Result<Vec<Review>, ApiError>;

    /// All videos for a movie, of any type
    async fn videos(&self, movie_id: u64) -> Result<Vec<Video>, ApiError>;

    /// First page of movies similar to `movie_id`
    async fn similar(&self, movie_id: u64) -> Result<Vec<Item>, ApiError>;
}
