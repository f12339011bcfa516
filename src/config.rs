//! Runtime configuration read from the environment

use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3/";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
/// Rows from the end of the list at which the next page is requested
pub const DEFAULT_SCROLL_THRESHOLD: usize = 3;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub language: String,
    pub debounce: Duration,
    pub scroll_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let api_key = lookup("TMDB_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("TMDB_API_KEY is not set")?;

        let mut api_url = lookup("TMDB_API_URL").unwrap_or(defaults.api_url);
        if !api_url.ends_with('/') {
            api_url.push('/');
        }

        let language = lookup("MOVIERAMA_LANGUAGE").unwrap_or(defaults.language);

        let debounce = match lookup("MOVIERAMA_DEBOUNCE_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .with_context(|| format!("invalid MOVIERAMA_DEBOUNCE_MS: {raw:?}"))?,
            ),
            None => defaults.debounce,
        };

        let scroll_threshold = match lookup("MOVIERAMA_SCROLL_THRESHOLD") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid MOVIERAMA_SCROLL_THRESHOLD: {raw:?}"))?,
            None => defaults.scroll_threshold,
        };

        Ok(Self {
            api_key: api_key.trim().to_string(),
            api_url,
            language,
            debounce,
            scroll_threshold,
        })
    }
}
