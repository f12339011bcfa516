//! The single catalogue state shared by every controller
//!
//! All mutation goes through the methods here so the pagination guard, the
//! page cursors and the expansion slot stay consistent with each other.

use std::collections::HashMap;
use std::sync::Arc;

use super::content::{Listing, SelectedItemDetails};
use super::types::{Item, Mode, Review, Video};

pub const BROWSE_HEADER: &str = "Playing this week";

/// Header shown above search results. Control characters are stripped so the
/// query cannot break the terminal layout.
pub fn search_header(query: &str) -> String {
    let clean: String = query.chars().filter(|c| !c.is_control()).collect();
    format!("Search results for \"{}\"", clean)
}

/// Issued when a paginated fetch is allowed to start
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTicket {
    pub mode: Mode,
    pub page: u32,
    /// Query to send; empty in browse mode
    pub query: String,
    generation: u64,
}

/// Issued when an item is expanded and its details should be fetched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailTicket {
    pub item_id: u64,
    request: u64,
}

/// Result of selecting a card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// The card was collapsed and is now the single expanded one
    Expanded(DetailTicket),
    /// The card was the expanded one and has been collapsed
    Collapsed,
}

/// Pagination cursor and bookkeeping for one collection
#[derive(Clone, Debug)]
struct Cursor {
    page: u32,
    /// Bumped on every reset so late responses for the old collection are dropped
    generation: u64,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { page: 1, generation: 0 }
    }
}

impl Cursor {
    fn reset(&mut self) {
        self.page = 1;
        self.generation += 1;
    }
}

/// Result collections and the genre map are shared with `Listing` snapshots;
/// appends copy only while a snapshot is still alive.
#[derive(Clone, Debug)]
pub struct AppState {
    pub browse_results: Arc<Vec<Item>>,
    pub search_results: Arc<Vec<Item>>,
    pub genres: Arc<HashMap<u32, String>>,
    pub current_query: String,
    pub selected_details: SelectedItemDetails,
    browse: Cursor,
    search: Cursor,
    fetch_in_flight: bool,
    header: String,
    expanded: Option<u64>,
    details_loading: bool,
    detail_requests: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            browse_results: Arc::default(),
            search_results: Arc::default(),
            genres: Arc::default(),
            current_query: String::new(),
            selected_details: SelectedItemDetails::default(),
            browse: Cursor::default(),
            search: Cursor::default(),
            fetch_in_flight: false,
            header: BROWSE_HEADER.to_string(),
            expanded: None,
            details_loading: false,
            detail_requests: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.current_query.is_empty() {
            Mode::Browse
        } else {
            Mode::Search
        }
    }

    /// Next page that will be requested for `mode`
    pub fn page(&self, mode: Mode) -> u32 {
        self.cursor(mode).page
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn results(&self, mode: Mode) -> &[Item] {
        match mode {
            Mode::Browse => &self.browse_results,
            Mode::Search => &self.search_results,
        }
    }

    fn cursor(&self, mode: Mode) -> &Cursor {
        match mode {
            Mode::Browse => &self.browse,
            Mode::Search => &self.search,
        }
    }

    fn cursor_mut(&mut self, mode: Mode) -> &mut Cursor {
        match mode {
            Mode::Browse => &mut self.browse,
            Mode::Search => &mut self.search,
        }
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Claim the fetch guard. Returns `None` (and changes nothing) while another
    /// paginated fetch is outstanding, or for a search with no query.
    pub fn begin_page_fetch(&mut self, mode: Mode) -> Option<PageTicket> {
        if self.fetch_in_flight || (mode == Mode::Search && self.current_query.is_empty()) {
            return None;
        }
        self.fetch_in_flight = true;

        let cursor = self.cursor(mode);
        Some(PageTicket {
            mode,
            page: cursor.page,
            query: match mode {
                Mode::Browse => String::new(),
                Mode::Search => self.current_query.clone(),
            },
            generation: cursor.generation,
        })
    }

    /// Append a successfully fetched page and advance the cursor. Returns `false`
    /// when the collection was reset while the fetch was outstanding; the page is
    /// then dropped and the cursor left alone.
    pub fn complete_page_fetch(&mut self, ticket: &PageTicket, items: Vec<Item>) -> bool {
        self.fetch_in_flight = false;

        let cursor = self.cursor_mut(ticket.mode);
        if cursor.generation != ticket.generation {
            return false;
        }
        cursor.page += 1;

        match ticket.mode {
            Mode::Browse => Arc::make_mut(&mut self.browse_results).extend(items),
            Mode::Search => Arc::make_mut(&mut self.search_results).extend(items),
        }
        true
    }

    /// Release the guard after a failed fetch. The cursor does not move.
    pub fn fail_page_fetch(&mut self) {
        self.fetch_in_flight = false;
    }

    // ========================================================================
    // Mode transitions
    // ========================================================================

    /// Back to the "now playing" listing, starting again from page one
    pub fn reset_to_browse(&mut self) {
        self.current_query.clear();
        self.browse_results = Arc::default();
        self.browse.reset();
        self.header = BROWSE_HEADER.to_string();
    }

    /// Start a fresh accumulation for a new query
    pub fn start_search(&mut self, query: &str) {
        self.search_results = Arc::default();
        self.search.reset();
        self.header = search_header(query);
        self.current_query = query.to_string();
    }

    // ========================================================================
    // Expansion
    // ========================================================================

    pub fn expanded(&self) -> Option<u64> {
        self.expanded
    }

    pub fn details_loading(&self) -> bool {
        self.details_loading
    }

    /// Toggle the expansion of `item_id`. Expanding collapses whatever was open
    /// and clears the details so nothing from the previous card is shown.
    pub fn toggle_expansion(&mut self, item_id: u64) -> Expansion {
        if self.expanded == Some(item_id) {
            self.collapse();
            return Expansion::Collapsed;
        }

        self.detail_requests += 1;
        self.expanded = Some(item_id);
        self.selected_details = SelectedItemDetails::default();
        self.details_loading = true;

        Expansion::Expanded(DetailTicket {
            item_id,
            request: self.detail_requests,
        })
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
        self.details_loading = false;
    }

    /// Whether `ticket` still belongs to the card that is currently expanded
    pub fn is_current_expansion(&self, ticket: &DetailTicket) -> bool {
        self.expanded == Some(ticket.item_id) && self.detail_requests == ticket.request
    }

    /// Store the fetched details. Fields whose fetch failed are passed as `None`
    /// and keep their previous value. Stale tickets are ignored.
    pub fn apply_details(
        &mut self,
        ticket: &DetailTicket,
        reviews: Option<Vec<Review>>,
        videos: Option<Vec<Video>>,
        similar: Option<Vec<Item>>,
    ) -> bool {
        if !self.is_current_expansion(ticket) {
            return false;
        }

        if let Some(reviews) = reviews {
            self.selected_details.set_reviews(reviews);
        }
        if let Some(videos) = videos {
            self.selected_details.set_videos(videos);
        }
        if let Some(similar) = similar {
            self.selected_details.set_similar(similar);
        }
        self.details_loading = false;
        true
    }

    fn shared_results(&self, mode: Mode) -> &Arc<Vec<Item>> {
        match mode {
            Mode::Browse => &self.browse_results,
            Mode::Search => &self.search_results,
        }
    }

    /// Snapshot for the view. Collections are shared, not copied.
    pub fn listing(&self) -> Listing {
        Listing {
            header: self.header.clone(),
            items: Arc::clone(self.shared_results(self.mode())),
            genres: Arc::clone(&self.genres),
            expanded: self.expanded,
            details: self.selected_details.clone(),
            details_loading: self.details_loading,
            is_loading: self.fetch_in_flight,
        }
    }
}
