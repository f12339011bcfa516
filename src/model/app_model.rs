//! Main application model with state management

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use super::app_state::AppState;
use super::content::Listing;
use super::types::{ActiveSection, Item, UiState};

/// Number of rows a PageDown jumps
const PAGE_JUMP: usize = 10;

/// Main application model containing all state
pub struct AppModel {
    state: Arc<Mutex<AppState>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::new())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    /// Exclusive access to the catalogue state. Never hold this across a network call.
    pub async fn state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().await
    }

    pub async fn get_listing(&self) -> Listing {
        self.state.lock().await.listing()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI State
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    /// Returns the new search text
    pub async fn append_to_search(&self, c: char) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
        state.search_query.clone()
    }

    /// Returns the new search text
    pub async fn backspace_search(&self) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop();
        state.search_query.clone()
    }

    pub async fn clear_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.clear();
    }

    pub async fn search_text(&self) -> String {
        self.ui_state.lock().await.search_query.clone()
    }

    pub async fn reset_selection(&self) {
        let mut state = self.ui_state.lock().await;
        state.selected_index = 0;
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.selected_index = state.selected_index.saturating_sub(1);
    }

    /// Move the cursor down by `step` rows. Returns true when the cursor ends up
    /// within `threshold` rows of the end of the list.
    pub async fn move_selection_down(&self, step: usize, threshold: usize) -> bool {
        let len = {
            let state = self.state.lock().await;
            state.results(state.mode()).len()
        };
        let mut state = self.ui_state.lock().await;
        if len == 0 {
            state.selected_index = 0;
            return true;
        }
        state.selected_index = (state.selected_index + step).min(len - 1);
        state.selected_index + threshold >= len - 1
    }

    pub async fn page_down(&self, threshold: usize) -> bool {
        self.move_selection_down(PAGE_JUMP, threshold).await
    }

    pub async fn get_selected_item(&self) -> Option<Item> {
        let index = self.ui_state.lock().await.selected_index;
        let state = self.state.lock().await;
        state.results(state.mode()).get(index).cloned()
    }

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}
