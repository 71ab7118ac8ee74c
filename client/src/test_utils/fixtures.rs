//! Test fixtures
//!
//! Factory functions for test data with sensible defaults.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::entities::{Author, Post, PostId, UserId, Viewer};

/// A fixed "now" so relative time labels are deterministic
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Create a test post with default values, written an hour before `fixed_now`
pub fn test_post(id: i64) -> Post {
    test_post_by(id, UserId(1), "test-user")
}

/// Create a test post by a specific author
pub fn test_post_by(id: i64, author_id: UserId, author_name: &str) -> Post {
    Post {
        id: PostId(id),
        author: Author {
            id: author_id,
            name: author_name.to_string(),
            avatar_url: format!("https://img.example.com/{}.png", author_id),
        },
        content: format!("Conversation #{}", id),
        url: format!("https://chat.example.com/share/{}", id),
        tags: vec![],
        reply_count: 0,
        favorite_count: 0,
        is_favorited: false,
        is_own: false,
        created_at: fixed_now() - Duration::hours(1),
    }
}

pub fn test_viewer() -> Viewer {
    Viewer {
        id: UserId(42),
        name: "viewer".to_string(),
    }
}
