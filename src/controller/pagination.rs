//! Guarded fetch-and-append of listing pages

use crate::model::Mode;
use super::AppController;

impl AppController {
    /// Fetch the next page for `mode` and append it to that mode's results.
    ///
    /// Dropped without effect while another page fetch is outstanding. Failures
    /// are logged and leave the cursor where it was, so the next trigger retries
    /// the same page. Rendering is left to the caller.
    ///
    /// A page that lands after its listing was reset is discarded. The reset's
    /// own load was dropped by the guard, so the fresh listing is fetched here.
    pub async fn load_next_page(&self, mode: Mode) {
        let mut next = Some(mode);
        while let Some(mode) = next {
            next = self.fetch_page(mode).await;
        }
    }

    /// One guarded fetch. Returns the mode to reload when the page was stale.
    async fn fetch_page(&self, mode: Mode) -> Option<Mode> {
        let ticket = {
            let mut state = self.model.state().await;
            match state.begin_page_fetch(mode) {
                Some(ticket) => ticket,
                None => {
                    tracing::debug!(?mode, in_flight = state.is_fetching(), "Page request dropped");
                    return None;
                }
            }
        };

        tracing::debug!(?mode, page = ticket.page, query = %ticket.query, "Loading next page");

        let result = match mode {
            Mode::Browse => self.source.now_playing(ticket.page).await,
            Mode::Search => self.source.search(&ticket.query, ticket.page).await,
        };

        let mut state = self.model.state().await;
        match result {
            Ok(items) => {
                let count = items.len();
                if state.complete_page_fetch(&ticket, items) {
                    tracing::info!(
                        ?mode,
                        page = ticket.page,
                        loaded = count,
                        total = state.results(mode).len(),
                        "Page loaded"
                    );
                    None
                } else {
                    let current = state.mode();
                    tracing::debug!(?mode, page = ticket.page, "Discarding page for a reset listing");
                    (state.page(current) == 1 && state.results(current).is_empty()).then_some(current)
                }
            }
            Err(e) => {
                state.fail_page_fetch();
                tracing::error!(?mode, page = ticket.page, error = %e, "Failed to load page");
                None
            }
        }
    }
}
