//! Feed state
//!
//! The whole controller state in one value: view mode, pagination cursor and
//! the rendered page. `update` turns an intent into effects; `apply` folds an
//! effect's outcome back in. Neither touches the network, so every ordering
//! question can be tested synchronously.

use chrono::{DateTime, Utc};

use crate::app::compose::ComposeModal;
use crate::app::intent::{Intent, NavItem};
use crate::domain::entities::{
    FavoriteToggle, FeedQuery, NewPost, PostId, PostPage, Tag, ViewMode, Viewer,
};
use crate::error::ApiError;
use crate::view::{
    empty_notice, render_header, render_post, render_tag_chip, tag_name_from_link, DeleteConfirm,
    PageView,
};

/// Page counter plus busy flag for infinite scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    /// A page request for the current view is in flight
    pub busy: bool,
    /// The last page said there is more
    pub has_next: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            busy: false,
            has_next: true,
        }
    }
}

/// A list fetch, tagged with the view generation it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub generation: u64,
    pub query: FeedQuery,
    pub page: u32,
}

/// Side effect requested by the state, run against the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchFeed(FeedRequest),
    FetchPopularTags,
    ToggleFavorite(PostId),
    SubmitPost {
        reply_to: Option<PostId>,
        draft: NewPost,
    },
    DeletePost(PostId),
}

/// Result of an effect, fed back into the state
#[derive(Debug)]
pub enum Outcome {
    FeedLoaded {
        request: FeedRequest,
        result: Result<PostPage, ApiError>,
    },
    TagsLoaded(Result<Vec<Tag>, ApiError>),
    FavoriteToggled {
        post_id: PostId,
        result: Result<FavoriteToggle, ApiError>,
    },
    PostSubmitted {
        reply_to: Option<PostId>,
        result: Result<(), ApiError>,
    },
    PostDeleted {
        post_id: PostId,
        result: Result<(), ApiError>,
    },
}

/// Controller state
#[derive(Debug, Clone)]
pub struct FeedState {
    mode: ViewMode,
    /// Bumped on every view (re)load; outcomes from older generations are dropped
    generation: u64,
    pagination: Pagination,
    page: PageView,
    viewer: Option<Viewer>,
}

impl FeedState {
    pub fn new(viewer: Option<Viewer>) -> Self {
        let mode = ViewMode::Home;
        Self {
            page: PageView {
                header: render_header(&mode),
                active_nav: Some(NavItem::Home),
                cards: Vec::new(),
                notice: None,
                popular_tags: Vec::new(),
                compose: ComposeModal::default(),
                delete_confirm: None,
                page_info: None,
            },
            mode,
            generation: 0,
            pagination: Pagination::default(),
            viewer,
        }
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page(&self) -> &PageView {
        &self.page
    }

    /// Handle a user intent, returning the effects to run
    pub fn update(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Start => {
                let mut effects = self.switch_mode(ViewMode::Home, Some(NavItem::Home));
                effects.push(Effect::FetchPopularTags);
                effects
            }

            Intent::Navigate(NavItem::Home) | Intent::BackToHome => {
                self.switch_mode(ViewMode::Home, Some(NavItem::Home))
            }

            Intent::Navigate(NavItem::Favorites) => {
                self.switch_mode(ViewMode::Favorites, Some(NavItem::Favorites))
            }

            Intent::Navigate(NavItem::Profile) => match self.viewer.clone() {
                Some(viewer) => self.switch_mode(
                    ViewMode::User {
                        id: viewer.id,
                        name: viewer.name,
                    },
                    Some(NavItem::Profile),
                ),
                None => {
                    tracing::warn!("Profile requested but no viewer is configured");
                    Vec::new()
                }
            },

            Intent::SelectTag(raw) => self.select_tag(tag_name_from_link(&raw)),

            Intent::SelectTagName(name) => self.select_tag(name.trim().to_string()),

            Intent::SelectUser { id, name } => self.switch_mode(ViewMode::User { id, name }, None),

            Intent::OpenReplies { post_id, original } => {
                self.switch_mode(ViewMode::Replies { post_id, original }, None)
            }

            Intent::Scrolled(metrics) => {
                if !metrics.near_bottom() || self.pagination.busy || !self.pagination.has_next {
                    return Vec::new();
                }
                self.pagination.busy = true;
                self.pagination.page += 1;
                vec![Effect::FetchFeed(self.request(self.pagination.page))]
            }

            Intent::ToggleLike(post_id) => vec![Effect::ToggleFavorite(post_id)],

            Intent::OpenCompose => {
                self.page.compose.open_new_post();
                Vec::new()
            }

            Intent::OpenReply(post_id) => {
                self.page.compose.open_reply(post_id);
                Vec::new()
            }

            Intent::CloseCompose => {
                self.page.compose.close();
                Vec::new()
            }

            Intent::SubmitCompose(form) => {
                let reply_to = self.page.compose.reply_to;
                match form.into_draft(reply_to.is_some()) {
                    Ok(draft) => vec![Effect::SubmitPost { reply_to, draft }],
                    Err(e) => {
                        tracing::warn!("Not submitting post: {}", e);
                        Vec::new()
                    }
                }
            }

            Intent::RequestDelete(post_id) => {
                self.page.delete_confirm = Some(DeleteConfirm { post_id });
                Vec::new()
            }

            Intent::CancelDelete => {
                self.page.delete_confirm = None;
                Vec::new()
            }

            Intent::ConfirmDelete => match &self.page.delete_confirm {
                Some(confirm) => vec![Effect::DeletePost(confirm.post_id)],
                None => {
                    tracing::warn!("Delete confirmed with no pending delete");
                    Vec::new()
                }
            },
        }
    }

    /// Fold an effect outcome into the state, returning any follow-up effects
    pub fn apply(&mut self, outcome: Outcome, now: DateTime<Utc>) -> Vec<Effect> {
        match outcome {
            Outcome::FeedLoaded { request, result } => {
                self.apply_feed(request, result, now);
                Vec::new()
            }

            Outcome::TagsLoaded(Ok(tags)) => {
                self.page.popular_tags = tags.iter().map(render_tag_chip).collect();
                Vec::new()
            }
            Outcome::TagsLoaded(Err(e)) => {
                tracing::error!("Error fetching tags: {}", e);
                Vec::new()
            }

            Outcome::FavoriteToggled {
                post_id,
                result: Ok(toggle),
            } => {
                match self.page.card_mut(post_id) {
                    Some(card) => card.like.apply(&toggle),
                    None => tracing::debug!("Post {} no longer on screen", post_id),
                }
                Vec::new()
            }
            Outcome::FavoriteToggled {
                post_id,
                result: Err(e),
            } => {
                tracing::error!("Error toggling like on post {}: {}", post_id, e);
                Vec::new()
            }

            Outcome::PostSubmitted {
                reply_to,
                result: Ok(()),
            } => {
                tracing::debug!("Post submitted (reply to {:?})", reply_to);
                self.page.compose.close();
                self.reload()
            }
            Outcome::PostSubmitted {
                result: Err(e), ..
            } => {
                tracing::error!("Error creating post: {}", e);
                Vec::new()
            }

            Outcome::PostDeleted {
                post_id,
                result: Ok(()),
            } => {
                self.page.cards.retain(|card| card.post_id != post_id);
                if self
                    .page
                    .delete_confirm
                    .as_ref()
                    .is_some_and(|c| c.post_id == post_id)
                {
                    self.page.delete_confirm = None;
                }
                Vec::new()
            }
            Outcome::PostDeleted {
                post_id,
                result: Err(e),
            } => {
                tracing::error!("Error deleting post {}: {}", post_id, e);
                Vec::new()
            }
        }
    }

    fn apply_feed(
        &mut self,
        request: FeedRequest,
        result: Result<PostPage, ApiError>,
        now: DateTime<Utc>,
    ) {
        if request.generation != self.generation {
            tracing::debug!(
                "Dropping stale page {} of {:?} (generation {} != {})",
                request.page,
                request.query,
                request.generation,
                self.generation
            );
            return;
        }

        // Page 1 also holds the busy flag so a scroll cannot race it
        self.pagination.busy = false;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(
                    "Error fetching page {} of {}: {}",
                    request.page,
                    self.mode,
                    e
                );
                return;
            }
        };

        tracing::debug!(
            "Received {} posts for page {} of {}",
            page.posts.len(),
            request.page,
            self.mode
        );

        let cards = page.posts.iter().map(|post| render_post(post, now));
        if request.page == 1 {
            self.page.cards = cards.collect();
        } else {
            self.page.cards.extend(cards);
        }

        self.pagination.has_next = page.has_next;
        self.page.page_info = page.current_page.zip(page.pages);
        self.page.notice = if self.page.cards.is_empty() {
            empty_notice(&self.mode).map(str::to_string)
        } else {
            None
        };
    }

    fn select_tag(&mut self, name: String) -> Vec<Effect> {
        if name.is_empty() {
            tracing::warn!("Ignoring tag click without a name");
            return Vec::new();
        }
        tracing::debug!("Clicked tag: {}", name);
        self.switch_mode(ViewMode::Tag { name }, None)
    }

    /// Enter `mode`: clear the list, reset the cursor, fetch page 1
    fn switch_mode(&mut self, mode: ViewMode, nav: Option<NavItem>) -> Vec<Effect> {
        tracing::debug!("Switching view {} -> {}", self.mode, mode);
        self.page.header = render_header(&mode);
        self.page.cards.clear();
        self.page.notice = None;
        self.page.page_info = None;
        if nav.is_some() {
            self.page.active_nav = nav;
        }
        self.mode = mode;
        self.reload()
    }

    /// Refetch page 1 of the current view; the list is replaced when it lands
    ///
    /// The cursor stays busy until page 1 settles, so no later page can land
    /// first and be overwritten by it.
    fn reload(&mut self) -> Vec<Effect> {
        self.generation += 1;
        self.pagination = Pagination {
            busy: true,
            ..Pagination::default()
        };
        vec![Effect::FetchFeed(self.request(1))]
    }

    fn request(&self, page: u32) -> FeedRequest {
        FeedRequest {
            generation: self.generation,
            query: self.mode.query(),
            page,
        }
    }
}
