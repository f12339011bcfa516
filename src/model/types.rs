//! Core type definitions for the application

use serde::{Deserialize, Deserializer};

pub const TRAILER_VIDEO_TYPE: &str = "Trailer";

/// Which part of the UI is currently focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }
}

/// Which collection the list is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// "Now playing" listing, no active query
    Browse,
    /// Results for the current non-empty query
    Search,
}

/// TMDB sends `null` for some string fields instead of omitting them
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A movie card
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre_ids: Vec<u32>,
}

impl Item {
    /// Four-digit year, or an empty string when TMDB has no usable date
    pub fn release_year(&self) -> String {
        use chrono::Datelike;

        chrono::NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d")
            .map(|date| date.year().to_string())
            .unwrap_or_else(|_| self.release_date.chars().take(4).collect())
    }
}

#[derive(Deserialize)]
struct RawAuthorDetails {
    #[serde(default)]
    rating: Option<f64>,
}

#[derive(Deserialize)]
struct RawReview {
    #[serde(default, deserialize_with = "null_as_default")]
    author: String,
    #[serde(default)]
    author_details: Option<RawAuthorDetails>,
    #[serde(default, deserialize_with = "null_as_default")]
    content: String,
}

/// A user review of a movie
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawReview")]
pub struct Review {
    pub author_name: String,
    /// 0-10 when the author left a rating
    pub rating_value: Option<f64>,
    pub content: String,
}

impl From<RawReview> for Review {
    fn from(raw: RawReview) -> Self {
        Self {
            author_name: raw.author,
            rating_value: raw.author_details.and_then(|d| d.rating),
            content: raw.content,
        }
    }
}

/// A video attached to a movie
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Video {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub site: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Video {
    pub fn is_trailer(&self) -> bool {
        self.kind == TRAILER_VIDEO_TYPE
    }

    /// Watch URL for the video, when it is hosted somewhere we know
    pub fn watch_url(&self) -> Option<String> {
        match self.site.as_str() {
            "YouTube" | "" => Some(format!("https://www.youtube.com/watch?v={}", self.key)),
            "Vimeo" => Some(format!("https://vimeo.com/{}", self.key)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub active_section: ActiveSection,
    /// Live text of the search bar
    pub search_query: String,
    pub selected_index: usize,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Results,
            search_query: String::new(),
            selected_index: 0,
            show_help_popup: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_tolerates_null_fields() {
        let item: Item = serde_json::from_str(
            r#"{"id": 7, "title": "Heat", "release_date": null, "poster_path": null, "overview": "x"}"#,
        )
        .unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.release_date, "");
        assert!(item.genre_ids.is_empty());
        assert_eq!(item.release_year(), "");
    }

    #[test]
    fn release_year_from_full_date() {
        let item: Item =
            serde_json::from_str(r#"{"id": 1, "title": "Movie 1", "release_date": "2024-01-01"}"#)
                .unwrap();
        assert_eq!(item.release_year(), "2024");
    }

    #[test]
    fn review_flattens_author_rating() {
        let review: Review = serde_json::from_str(
            r#"{"author": "ann", "author_details": {"rating": 8.0}, "content": "great"}"#,
        )
        .unwrap();
        assert_eq!(review.author_name, "ann");
        assert_eq!(review.rating_value, Some(8.0));

        let unrated: Review =
            serde_json::from_str(r#"{"author": "bob", "author_details": {"rating": null}, "content": "meh"}"#)
                .unwrap();
        assert_eq!(unrated.rating_value, None);
    }

    #[test]
    fn video_type_maps_to_kind() {
        let video: Video =
            serde_json::from_str(r#"{"key": "abc", "type": "Trailer", "site": "YouTube"}"#).unwrap();
        assert!(video.is_trailer());
        assert_eq!(
            video.watch_url().as_deref(),
            Some("https://www.youtube.com/watch?v=abc")
        );
    }
}
