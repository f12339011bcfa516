//! Single expanded card and its detail fetches

use crate::model::{ApiError, Expansion};
use super::AppController;

impl AppController {
    /// Toggle the card for `item_id`. Expanding it collapses any other card and
    /// fetches reviews, trailers and similar titles together; the details become
    /// ready only once all three have settled.
    pub async fn on_item_selected(&self, item_id: u64) {
        let expansion = self.model.state().await.toggle_expansion(item_id);
        let ticket = match expansion {
            Expansion::Collapsed => {
                tracing::debug!(item_id, "Card collapsed");
                return;
            }
            Expansion::Expanded(ticket) => ticket,
        };

        tracing::debug!(item_id, "Card expanded, fetching details");

        let (reviews, videos, similar) = futures::join!(
            self.source.reviews(item_id),
            self.source.videos(item_id),
            self.source.similar(item_id),
        );

        let reviews = Self::settle("reviews", item_id, reviews);
        let videos = Self::settle("videos", item_id, videos);
        let similar = Self::settle("similar", item_id, similar);

        let mut state = self.model.state().await;
        if state.apply_details(&ticket, reviews, videos, similar) {
            tracing::info!(
                item_id,
                reviews = state.selected_details.reviews.len(),
                trailers = state.selected_details.videos.len(),
                similar = state.selected_details.similar.len(),
                "Details ready"
            );
        } else {
            tracing::debug!(item_id, "Discarding details for a card that is no longer expanded");
        }
    }

    /// One failed detail fetch must not sink the other two
    fn settle<T>(what: &'static str, item_id: u64, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(item_id, what, error = %e, "Failed to load details");
                None
            }
        }
    }

    /// Open the expanded card's trailer in the system browser
    pub async fn open_trailer(&self) {
        let url = {
            let state = self.model.state().await;
            if state.expanded().is_none() {
                return;
            }
            state.selected_details.trailer().and_then(|video| video.watch_url())
        };

        match url {
            Some(url) => {
                tracing::info!(%url, "Opening trailer");
                if let Err(e) = webbrowser::open(&url) {
                    tracing::error!(%url, error = %e, "Failed to open browser");
                }
            }
            None => tracing::debug!("No trailer to open"),
        }
    }
}
