//! Domain entities
//!
//! Server snapshots (posts, tags, authors) and the client's view mode.

pub mod post;
pub mod tag;
pub mod user;
pub mod view_mode;

pub use post::{FavoriteAction, FavoriteToggle, NewPost, Post, PostId, PostPage};
pub use tag::Tag;
pub use user::{Author, UserId, Viewer};
pub use view_mode::{FeedQuery, ViewMode};
