//! Browse/search mode switching and the debounced search input

use crate::model::Mode;
use super::AppController;

/// What a query change means for the listing
#[derive(Debug, PartialEq, Eq)]
enum QueryChange {
    Browse,
    Continue,
    NewSearch,
}

impl AppController {
    /// Search text edited. Rate-limited: only the last edit within the debounce
    /// window reaches `on_query_changed`.
    pub async fn on_input(&self, raw: String) {
        let controller = self.clone();
        let mut debounce = self.search_debounce.lock().await;
        if debounce.is_pending() {
            tracing::trace!("Restarting search debounce");
        }
        debounce.arm(async move {
            controller.on_query_changed(&raw).await;
        });
    }

    /// Search text cleared outright: skip the debounce and go straight back to browsing
    pub async fn on_input_cleared(&self) {
        if self.search_debounce.lock().await.cancel() {
            tracing::debug!("Pending search cancelled");
        }
        self.on_query_changed("").await;
    }

    /// Apply a query to the listing and load the next page for it.
    ///
    /// An empty query restarts the "now playing" listing, the current query
    /// continues its pagination, and any other query starts a new search.
    pub async fn on_query_changed(&self, raw: &str) {
        let query = raw.trim();

        let change = {
            let mut state = self.model.state().await;
            if query.is_empty() {
                state.reset_to_browse();
                state.collapse();
                QueryChange::Browse
            } else if state.current_query == query {
                QueryChange::Continue
            } else {
                state.start_search(query);
                state.collapse();
                QueryChange::NewSearch
            }
        };

        match change {
            QueryChange::Browse => {
                tracing::info!("Switched to browse mode");
                self.model.reset_selection().await;
                self.load_next_page(Mode::Browse).await;
            }
            QueryChange::Continue => {
                self.load_next_page(Mode::Search).await;
            }
            QueryChange::NewSearch => {
                tracing::info!(query, "Starting new search");
                self.model.reset_selection().await;
                self.load_next_page(Mode::Search).await;
            }
        }
    }

    /// The cursor is close to the end of the list: fetch more of whatever is shown.
    /// In search mode the query is re-read from the search bar so pending edits win.
    pub async fn on_scroll_near_bottom(&self) {
        let mode = self.model.state().await.mode();
        match mode {
            Mode::Browse => self.load_next_page(Mode::Browse).await,
            Mode::Search => {
                let live_query = self.model.search_text().await;
                self.on_query_changed(&live_query).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::model::{Mode, BROWSE_HEADER};
    use crate::testing::{items, Call, MockMovieSource};
    use super::super::tests::controller_with;

    #[tokio::test(start_paused = true)]
    async fn typing_within_the_window_searches_once() {
        let source = Arc::new(MockMovieSource::new().with_search("batman", 1, items(0..5)));
        let controller = controller_with(source.clone());

        controller.on_input("bat".to_string()).await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        controller.on_input("batman".to_string()).await;
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(source.calls(), vec![Call::Search("batman".to_string(), 1)]);
        let state = controller.model.state().await;
        assert_eq!(state.search_results.len(), 5);
        assert_eq!(state.header(), "Search results for \"batman\"");
    }

    #[tokio::test]
    async fn new_query_resets_search_and_keeps_browse() {
        let source = Arc::new(
            MockMovieSource::new()
                .with_now_playing(1, items(0..20))
                .with_now_playing(2, items(20..40))
                .with_search("alien", 1, items(100..103))
                .with_search("alien", 2, items(103..106))
                .with_search("aliens", 1, items(200..201)),
        );
        let controller = controller_with(source.clone());
        controller.load_next_page(Mode::Browse).await;
        controller.load_next_page(Mode::Browse).await;

        controller.on_query_changed("alien").await;
        controller.on_query_changed("alien").await;
        assert_eq!(controller.model.state().await.page(Mode::Search), 3);

        controller.on_query_changed("  aliens ").await;

        let state = controller.model.state().await;
        assert_eq!(state.current_query, "aliens");
        let ids: Vec<u64> = state.search_results.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![200]);
        assert_eq!(state.page(Mode::Search), 2);
        assert_eq!(state.browse_results.len(), 40);
        assert_eq!(state.page(Mode::Browse), 3);
    }

    #[tokio::test]
    async fn same_query_continues_pagination() {
        let source = Arc::new(
            MockMovieSource::new()
                .with_search("heat", 1, items(0..2))
                .with_search("heat", 2, items(2..4)),
        );
        let controller = controller_with(source.clone());

        controller.on_query_changed("heat").await;
        controller.on_query_changed("heat ").await;

        assert_eq!(
            source.calls(),
            vec![Call::Search("heat".to_string(), 1), Call::Search("heat".to_string(), 2)]
        );
        assert_eq!(controller.model.state().await.search_results.len(), 4);
    }

    #[tokio::test]
    async fn empty_query_restarts_browse() {
        let source = Arc::new(MockMovieSource::new().with_now_playing(1, items(0..3)));
        let controller = controller_with(source.clone());
        controller.load_next_page(Mode::Browse).await;
        controller.on_query_changed("up").await;

        controller.on_query_changed("   ").await;

        let state = controller.model.state().await;
        assert_eq!(state.mode(), Mode::Browse);
        assert_eq!(state.header(), BROWSE_HEADER);
        // cleared and reloaded from page one
        assert_eq!(state.browse_results.len(), 3);
        assert_eq!(state.page(Mode::Browse), 2);
        assert_eq!(source.count(|c| *c == Call::NowPlaying(1)), 2);
    }

    #[tokio::test]
    async fn scrolling_in_browse_mode_loads_the_next_page() {
        let source = Arc::new(MockMovieSource::new().with_now_playing(1, items(0..3)));
        let controller = controller_with(source.clone());

        controller.on_scroll_near_bottom().await;
        controller.on_scroll_near_bottom().await;

        assert_eq!(source.calls(), vec![Call::NowPlaying(1), Call::NowPlaying(2)]);
    }

    #[tokio::test]
    async fn scrolling_in_search_mode_uses_the_live_search_text() {
        let source = Arc::new(MockMovieSource::new());
        let controller = controller_with(source.clone());
        controller.on_query_changed("ali").await;

        // edited but the debounce has not fired yet
        for c in "ali".chars().chain("en".chars()) {
            controller.model.append_to_search(c).await;
        }
        controller.on_scroll_near_bottom().await;

        assert_eq!(
            source.calls(),
            vec![Call::Search("ali".to_string(), 1), Call::Search("alien".to_string(), 1)]
        );
        assert_eq!(controller.model.state().await.current_query, "alien");
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_cancels_a_pending_search() {
        let source = Arc::new(MockMovieSource::new());
        let controller = controller_with(source.clone());

        controller.on_input("dune".to_string()).await;
        controller.on_input_cleared().await;
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(source.calls(), vec![Call::NowPlaying(1)]);
    }
}
