//! Mock implementation of the gallery API
//!
//! In-memory pages keyed by query, with call recording, a failure switch and
//! a gate that holds every response until released.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use tokio::sync::watch;

use crate::domain::entities::{
    FavoriteAction, FavoriteToggle, FeedQuery, NewPost, PostId, PostPage, Tag, UserId,
};
use crate::domain::ports::FeedApi;
use crate::error::ApiError;

/// A call received by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Fetch(FeedQuery, u32),
    PopularTags,
    CreatePost(NewPost),
    CreateReply(PostId, NewPost),
    ToggleFavorite(PostId),
    Delete(PostId),
}

pub struct MockFeedApi {
    pages: RwLock<HashMap<FeedQuery, Vec<PostPage>>>,
    tags: RwLock<Vec<Tag>>,
    favorites: RwLock<HashMap<PostId, (bool, i64)>>,
    calls: RwLock<Vec<ApiCall>>,
    failing: AtomicBool,
    /// `true` while responses are held back
    gate: watch::Sender<bool>,
}

impl Default for MockFeedApi {
    fn default() -> Self {
        let (gate, _) = watch::channel(false);
        Self {
            pages: RwLock::new(HashMap::new()),
            tags: RwLock::new(Vec::new()),
            favorites: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
            failing: AtomicBool::new(false),
            gate,
        }
    }
}

impl MockFeedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next page for `query`; pages are served in insertion order
    pub fn with_page(self, query: FeedQuery, page: PostPage) -> Self {
        {
            let mut favorites = self.favorites.write().unwrap();
            for post in &page.posts {
                favorites.insert(post.id, (post.is_favorited, post.favorite_count));
            }
            self.pages
                .write()
                .unwrap()
                .entry(query)
                .or_default()
                .push(page);
        }
        self
    }

    pub fn with_tags(self, tags: Vec<Tag>) -> Self {
        *self.tags.write().unwrap() = tags;
        self
    }

    /// Make every following request fail with a 500
    pub fn fail_requests(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Hold responses until `release`
    pub fn hold(&self) {
        self.gate.send_replace(true);
    }

    pub fn release(&self) {
        self.gate.send_replace(false);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.read().unwrap().clone()
    }

    /// Pages requested for `query`, in call order
    pub fn fetches(&self, query: &FeedQuery) -> Vec<u32> {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                ApiCall::Fetch(q, page) if q == query => Some(*page),
                _ => None,
            })
            .collect()
    }

    /// Record the call, wait for the gate, then decide success or failure
    async fn begin(&self, call: ApiCall) -> Result<(), ApiError> {
        self.calls.write().unwrap().push(call);

        let mut rx = self.gate.subscribe();
        loop {
            let held = *rx.borrow_and_update();
            if !held || rx.changed().await.is_err() {
                break;
            }
        }

        if self.failing.load(Ordering::SeqCst) {
            Err(ApiError::Status {
                status: 500,
                message: "mock failure".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn page(&self, query: &FeedQuery, page: u32) -> PostPage {
        self.pages
            .read()
            .unwrap()
            .get(query)
            .and_then(|pages| pages.get(page.saturating_sub(1) as usize))
            .cloned()
            .unwrap_or_else(|| PostPage::new(vec![], false))
    }

    async fn serve(&self, query: FeedQuery, page: u32) -> Result<PostPage, ApiError> {
        self.begin(ApiCall::Fetch(query.clone(), page)).await?;
        Ok(self.page(&query, page))
    }
}

#[async_trait]
impl FeedApi for MockFeedApi {
    async fn list_posts(&self, page: u32) -> Result<PostPage, ApiError> {
        self.serve(FeedQuery::Home, page).await
    }

    async fn popular_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.begin(ApiCall::PopularTags).await?;
        Ok(self.tags.read().unwrap().clone())
    }

    async fn posts_by_tag(&self, tag: &str, page: u32) -> Result<PostPage, ApiError> {
        self.serve(FeedQuery::Tag(tag.to_string()), page).await
    }

    async fn posts_by_user(&self, user_id: UserId, page: u32) -> Result<PostPage, ApiError> {
        self.serve(FeedQuery::User(user_id), page).await
    }

    async fn replies(&self, post_id: PostId, page: u32) -> Result<PostPage, ApiError> {
        self.serve(FeedQuery::Replies(post_id), page).await
    }

    async fn favorites(&self, page: u32) -> Result<PostPage, ApiError> {
        self.serve(FeedQuery::Favorites, page).await
    }

    async fn create_post(&self, draft: &NewPost) -> Result<(), ApiError> {
        self.begin(ApiCall::CreatePost(draft.clone())).await
    }

    async fn create_reply(&self, parent: PostId, draft: &NewPost) -> Result<(), ApiError> {
        self.begin(ApiCall::CreateReply(parent, draft.clone())).await
    }

    async fn toggle_favorite(&self, post_id: PostId) -> Result<FavoriteToggle, ApiError> {
        self.begin(ApiCall::ToggleFavorite(post_id)).await?;

        let mut favorites = self.favorites.write().unwrap();
        let entry = favorites.entry(post_id).or_insert((false, 0));
        let action = if entry.0 {
            entry.1 -= 1;
            FavoriteAction::Removed
        } else {
            entry.1 += 1;
            FavoriteAction::Added
        };
        entry.0 = !entry.0;

        Ok(FavoriteToggle {
            action,
            favorite_count: entry.1,
        })
    }

    async fn delete_post(&self, post_id: PostId) -> Result<(), ApiError> {
        self.begin(ApiCall::Delete(post_id)).await?;

        for pages in self.pages.write().unwrap().values_mut() {
            for page in pages.iter_mut() {
                page.posts.retain(|post| post.id != post_id);
            }
        }
        Ok(())
    }
}
