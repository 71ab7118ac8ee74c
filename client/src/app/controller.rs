//! Feed controller
//!
//! Drives `FeedState` against a `FeedApi`: each intent is applied to the
//! state, the resulting effects run as tokio tasks, and their outcomes come
//! back through a channel to be applied in arrival order. Only the controller
//! touches the state, so there is a single logical UI thread even though
//! requests are in flight concurrently.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::app::intent::Intent;
use crate::app::state::{Effect, FeedState, Outcome};
use crate::domain::entities::Viewer;
use crate::domain::ports::FeedApi;
use crate::view::PageView;

/// Feed view controller
pub struct FeedController<A>
where
    A: FeedApi + 'static,
{
    api: Arc<A>,
    state: FeedState,
    outcomes_tx: mpsc::UnboundedSender<Outcome>,
    outcomes_rx: mpsc::UnboundedReceiver<Outcome>,
    in_flight: usize,
}

impl<A> FeedController<A>
where
    A: FeedApi + 'static,
{
    pub fn new(api: Arc<A>, viewer: Option<Viewer>) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            api,
            state: FeedState::new(viewer),
            outcomes_tx,
            outcomes_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn page(&self) -> &PageView {
        self.state.page()
    }

    /// Number of effects whose outcome has not been applied yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Handle a user intent; network effects start immediately in the background
    pub fn dispatch(&mut self, intent: Intent) {
        tracing::debug!("Dispatching {:?}", intent);
        let effects = self.state.update(intent);
        self.spawn_all(effects);
    }

    /// Wait for the next effect to finish and apply its outcome
    ///
    /// Returns `false` when nothing is in flight.
    pub async fn next_outcome(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.outcomes_rx.recv().await {
            Some(outcome) => {
                self.in_flight -= 1;
                let effects = self.state.apply(outcome, Utc::now());
                self.spawn_all(effects);
                true
            }
            None => false,
        }
    }

    /// Apply outcomes until no effect is left in flight, follow-ups included
    pub async fn settle(&mut self) {
        while self.next_outcome().await {}
    }

    fn spawn_all(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.spawn(effect);
        }
    }

    fn spawn(&mut self, effect: Effect) {
        self.in_flight += 1;
        let api = Arc::clone(&self.api);
        let tx = self.outcomes_tx.clone();
        tokio::spawn(async move {
            let outcome = run_effect(api.as_ref(), effect).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("Controller dropped before outcome arrived");
            }
        });
    }
}

/// Run one effect against the API
pub async fn run_effect<A>(api: &A, effect: Effect) -> Outcome
where
    A: FeedApi + ?Sized,
{
    match effect {
        Effect::FetchFeed(request) => {
            let result = api.fetch_page(&request.query, request.page).await;
            Outcome::FeedLoaded { request, result }
        }
        Effect::FetchPopularTags => Outcome::TagsLoaded(api.popular_tags().await),
        Effect::ToggleFavorite(post_id) => Outcome::FavoriteToggled {
            post_id,
            result: api.toggle_favorite(post_id).await,
        },
        Effect::SubmitPost { reply_to, draft } => {
            let result = match reply_to {
                Some(parent) => api.create_reply(parent, &draft).await,
                None => api.create_post(&draft).await,
            };
            Outcome::PostSubmitted { reply_to, result }
        }
        Effect::DeletePost(post_id) => Outcome::PostDeleted {
            post_id,
            result: api.delete_post(post_id).await,
        },
    }
}
