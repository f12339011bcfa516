//! Recording in-memory `MovieSource` for tests

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::model::{ApiError, Item, MovieSource, Review, Video};

/// A recorded call against the mock source
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    NowPlaying(u32),
    Search(String, u32),
    Genres,
    Reviews(u64),
    Videos(u64),
    Similar(u64),
}

pub fn item(id: u64, title: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        release_date: "2024-01-01".to_string(),
        overview: format!("Overview of {title}"),
        poster_path: Some(format!("/poster{id}.jpg")),
        vote_average: 7.5,
        genre_ids: vec![1],
    }
}

pub fn items(ids: std::ops::Range<u64>) -> Vec<Item> {
    ids.map(|id| item(id, &format!("Movie {id}"))).collect()
}

pub fn review(author: &str) -> Review {
    Review {
        author_name: author.to_string(),
        rating_value: Some(7.0),
        content: format!("{author} liked it"),
    }
}

pub fn video(kind: &str, key: &str) -> Video {
    Video {
        key: key.to_string(),
        kind: kind.to_string(),
        site: "YouTube".to_string(),
        name: String::new(),
    }
}

/// Holds fetches until opened. Once open it stays open.
#[derive(Clone)]
pub struct Gate(Arc<watch::Sender<bool>>);

impl Gate {
    fn new() -> Self {
        Self(Arc::new(watch::channel(false).0))
    }

    pub fn open(&self) {
        self.0.send_replace(true);
    }

    async fn wait(&self) {
        let mut rx = self.0.subscribe();
        let _ = rx.wait_for(|open| *open).await;
    }
}

/// Unconfigured calls succeed with empty collections.
#[derive(Default)]
pub struct MockMovieSource {
    calls: Mutex<Vec<Call>>,
    now_playing: Mutex<HashMap<u32, Vec<Item>>>,
    search: Mutex<HashMap<(String, u32), Vec<Item>>>,
    genres: Mutex<HashMap<u32, String>>,
    reviews: Mutex<Vec<Review>>,
    videos: Mutex<Vec<Video>>,
    similar: Mutex<Vec<Item>>,
    failing: Mutex<HashSet<&'static str>>,
    page_gate: Mutex<Option<Gate>>,
    detail_gates: Mutex<HashMap<u64, Gate>>,
}

impl MockMovieSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_now_playing(self, page: u32, items: Vec<Item>) -> Self {
        self.now_playing.lock().unwrap().insert(page, items);
        self
    }

    pub fn with_search(self, query: &str, page: u32, items: Vec<Item>) -> Self {
        self.search.lock().unwrap().insert((query.to_string(), page), items);
        self
    }

    pub fn with_genres(self, genres: &[(u32, &str)]) -> Self {
        *self.genres.lock().unwrap() = genres.iter().map(|(id, name)| (*id, name.to_string())).collect();
        self
    }

    pub fn with_reviews(self, reviews: Vec<Review>) -> Self {
        *self.reviews.lock().unwrap() = reviews;
        self
    }

    pub fn with_videos(self, videos: Vec<Video>) -> Self {
        *self.videos.lock().unwrap() = videos;
        self
    }

    pub fn with_similar(self, similar: Vec<Item>) -> Self {
        *self.similar.lock().unwrap() = similar;
        self
    }

    pub fn set_similar(&self, similar: Vec<Item>) {
        *self.similar.lock().unwrap() = similar;
    }

    /// Make every call to `operation` fail with a network error
    pub fn failing(self, operation: &'static str) -> Self {
        self.failing.lock().unwrap().insert(operation);
        self
    }

    pub fn recover(&self, operation: &'static str) {
        self.failing.lock().unwrap().remove(operation);
    }

    /// Hold every paginated fetch until the returned gate is opened
    pub fn gate_pages(&self) -> Gate {
        let gate = Gate::new();
        *self.page_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Hold the detail fetches for `movie_id` until the returned gate is opened
    pub fn gate_details(&self, movie_id: u64) -> Gate {
        let gate = Gate::new();
        self.detail_gates.lock().unwrap().insert(movie_id, gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| matches(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, operation: &'static str) -> Result<(), ApiError> {
        if self.failing.lock().unwrap().contains(operation) {
            return Err(ApiError::Network(format!("{operation} unreachable")));
        }
        Ok(())
    }

    async fn wait_for_page_gate(&self) {
        let gate = self.page_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.wait().await;
        }
    }

    async fn wait_for_detail_gate(&self, movie_id: u64) {
        let gate = self.detail_gates.lock().unwrap().get(&movie_id).cloned();
        if let Some(gate) = gate {
            gate.wait().await;
        }
    }
}

#[async_trait]
impl MovieSource for MockMovieSource {
    async fn now_playing(&self, page: u32) -> Result<Vec<Item>, ApiError> {
        self.record(Call::NowPlaying(page));
        self.wait_for_page_gate().await;
        self.check("now_playing")?;
        Ok(self.now_playing.lock().unwrap().get(&page).cloned().unwrap_or_default())
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<Item>, ApiError> {
        self.record(Call::Search(query.to_string(), page));
        self.wait_for_page_gate().await;
        self.check("search")?;
        Ok(self
            .search
            .lock()
            .unwrap()
            .get(&(query.to_string(), page))
            .cloned()
            .unwrap_or_default())
    }

    async fn genres(&self) -> Result<HashMap<u32, String>, ApiError> {
        self.record(Call::Genres);
        self.check("genres")?;
        Ok(self.genres.lock().unwrap().clone())
    }

    async fn reviews(&self, movie_id: u64) -> Result<Vec<Review>, ApiError> {
        self.record(Call::Reviews(movie_id));
        self.wait_for_detail_gate(movie_id).await;
        self.check("reviews")?;
        Ok(self.reviews.lock().unwrap().clone())
    }

    async fn videos(&self, movie_id: u64) -> Result<Vec<Video>, ApiError> {
        self.record(Call::Videos(movie_id));
        self.wait_for_detail_gate(movie_id).await;
        self.check("videos")?;
        Ok(self.videos.lock().unwrap().clone())
    }

    async fn similar(&self, movie_id: u64) -> Result<Vec<Item>, ApiError> {
        self.record(Call::Similar(movie_id));
        self.wait_for_detail_gate(movie_id).await;
        self.check("similar")?;
        Ok(self.similar.lock().unwrap().clone())
    }
}
