//! Gallery API port trait
//!
//! Defines the REST contract the feed controller consumes. The backend is a
//! black box: only these endpoints and their payload shapes are assumed.

use async_trait::async_trait;

use crate::domain::entities::{FavoriteToggle, FeedQuery, NewPost, PostId, PostPage, Tag, UserId};
use crate::error::ApiError;

/// Port trait for the gallery backend
#[async_trait]
pub trait FeedApi: Send + Sync {
    /// `GET /api/posts?page=N`
    async fn list_posts(&self, page: u32) -> Result<PostPage, ApiError>;

    /// `GET /api/tags/popular`
    async fn popular_tags(&self) -> Result<Vec<Tag>, ApiError>;

    /// `GET /api/posts/tag/{tag}?page=N`
    async fn posts_by_tag(&self, tag: &str, page: u32) -> Result<PostPage, ApiError>;

    /// `GET /api/posts/user/{id}?page=N`
    async fn posts_by_user(&self, user_id: UserId, page: u32) -> Result<PostPage, ApiError>;

    /// `GET /api/posts/{id}/replies?page=N`
    async fn replies(&self, post_id: PostId, page: u32) -> Result<PostPage, ApiError>;

    /// `GET /api/posts/favorites?page=N`
    async fn favorites(&self, page: u32) -> Result<PostPage, ApiError>;

    /// `POST /api/posts`
    async fn create_post(&self, draft: &NewPost) -> Result<(), ApiError>;

    /// `POST /api/posts/{id}/replies`
    async fn create_reply(&self, parent: PostId, draft: &NewPost) -> Result<(), ApiError>;

    /// `POST /api/posts/{id}/favorite`
    async fn toggle_favorite(&self, post_id: PostId) -> Result<FavoriteToggle, ApiError>;

    /// `DELETE /api/posts/{id}`
    async fn delete_post(&self, post_id: PostId) -> Result<(), ApiError>;

    /// Fetch one page of whichever list backs `query`
    async fn fetch_page(&self, query: &FeedQuery, page: u32) -> Result<PostPage, ApiError> {
        match query {
            FeedQuery::Home => self.list_posts(page).await,
            FeedQuery::Tag(name) => self.posts_by_tag(name, page).await,
            FeedQuery::User(id) => self.posts_by_user(*id, page).await,
            FeedQuery::Replies(id) => self.replies(*id, page).await,
            FeedQuery::Favorites => self.favorites(page).await,
        }
    }
}
