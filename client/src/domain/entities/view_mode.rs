//! View mode
//!
//! Which filter currently determines the feed contents. Exactly one is active.

use super::{PostId, UserId};

/// The active feed filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Home,
    Tag { name: String },
    User { id: UserId, name: String },
    /// Replies to a post, with the original content shown as context
    Replies { post_id: PostId, original: String },
    Favorites,
}

impl ViewMode {
    /// The list query backing this mode
    pub fn query(&self) -> FeedQuery {
        match self {
            ViewMode::Home => FeedQuery::Home,
            ViewMode::Tag { name } => FeedQuery::Tag(name.clone()),
            ViewMode::User { id, .. } => FeedQuery::User(*id),
            ViewMode::Replies { post_id, .. } => FeedQuery::Replies(*post_id),
            ViewMode::Favorites => FeedQuery::Favorites,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Home => write!(f, "home"),
            ViewMode::Tag { name } => write!(f, "tag:{}", name),
            ViewMode::User { id, .. } => write!(f, "user:{}", id),
            ViewMode::Replies { post_id, .. } => write!(f, "replies:{}", post_id),
            ViewMode::Favorites => write!(f, "favorites"),
        }
    }
}

/// A paginated list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedQuery {
    Home,
    Tag(String),
    User(UserId),
    Replies(PostId),
    Favorites,
}
