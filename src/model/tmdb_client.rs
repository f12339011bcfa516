//! TMDB API client

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::{log_api_request, log_api_result};
use super::content::{GenreList, ResultsPage};
use super::error::ApiError;
use super::source::MovieSource;
use super::types::{Item, Review, Video};

const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";
pub const POSTER_SIZE: &str = "w500";

/// Full URL of a poster image at the given TMDB size (e.g. `w500`, `original`)
pub fn poster_url(poster_path: &str, size: &str) -> String {
    format!("{}{}{}", IMAGE_BASE_URL, size, poster_path)
}

/// TMDB v3 client authenticated with an API key
#[derive(Clone)]
pub struct TmdbClient {
    http: Arc<reqwest::Client>,
    api_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Arc::new(reqwest::Client::new()),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        }
    }

    /// `path` is relative to the API root; reqwest encodes the query values
    fn request(&self, path: &str, params: &[(&str, String)]) -> reqwest::RequestBuilder {
        self.http
            .get(format!("{}{}", self.api_url, path))
            .query(&[("language", self.language.as_str())])
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T, ApiError> {
        let response = self.request(path, params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16() });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_results<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<Vec<T>, ApiError> {
        let page: ResultsPage<T> = self.get_json(path, params).await?;
        tracing::trace!(path, page = ?page.page, total_pages = ?page.total_pages, "Results page decoded");
        Ok(page.results)
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn now_playing(&self, page: u32) -> Result<Vec<Item>, ApiError> {
        log_api_request!("now_playing", page);
        let result = self
            .get_results("movie/now_playing", &[("page", page.to_string())])
            .await;
        log_api_result!("now_playing", result);
        result
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<Item>, ApiError> {
        log_api_request!("search", query, page);
        let result = self
            .get_results(
                "search/movie",
                &[
                    ("include_adult", "false".to_string()),
                    ("page", page.to_string()),
                    ("query", query.to_string()),
                ],
            )
            .await;
        log_api_result!("search", result);
        result
    }

    async fn genres(&self) -> Result<HashMap<u32, String>, ApiError> {
        log_api_request!("genres", kind = "movie");
        let result = self
            .get_json::<GenreList>("genre/movie/list", &[])
            .await
            .map(GenreList::into_map);
        log_api_result!("genres", result);
        result
    }

    async fn reviews(&self, movie_id: u64) -> Result<Vec<Review>, ApiError> {
        log_api_request!("reviews", movie_id);
        let result = self
            .get_results(&format!("movie/{}/reviews", movie_id), &[("page", "1".to_string())])
            .await;
        log_api_result!("reviews", result);
        result
    }

    async fn videos(&self, movie_id: u64) -> Result<Vec<Video>, ApiError> {
        log_api_request!("videos", movie_id);
        let result = self.get_results(&format!("movie/{}/videos", movie_id), &[]).await;
        log_api_result!("videos", result);
        result
    }

    async fn similar(&self, movie_id: u64) -> Result<Vec<Item>, ApiError> {
        log_api_request!("similar", movie_id);
        let result = self
            .get_results(&format!("movie/{}/similar", movie_id), &[("page", "1".to_string())])
            .await;
        log_api_result!("similar", result);
        result
    }
}
