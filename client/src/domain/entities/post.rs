//! Post domain entity
//!
//! A post is an immutable snapshot from the server. The client never mutates
//! one; after an action only the rendered card is patched.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::user::{deserialize_null_default, Author};

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A feed item, top-level post or reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub content: String,
    /// External URL the content links to (empty for most replies)
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tags: Vec<String>,
    #[serde(
        rename = "replies_count",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub reply_count: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub favorite_count: i64,
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub is_own: bool,
    #[serde(with = "server_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// One page of a post list
///
/// Reply listings use `replies` as the list key, every other listing `posts`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostPage {
    #[serde(alias = "replies")]
    pub posts: Vec<Post>,
    /// Absent on older servers; treated as "maybe more"
    #[serde(default = "default_has_next")]
    pub has_next: bool,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub pages: Option<u32>,
}

fn default_has_next() -> bool {
    true
}

impl PostPage {
    /// A page with no envelope metadata
    pub fn new(posts: Vec<Post>, has_next: bool) -> Self {
        Self {
            posts,
            has_next,
            total: None,
            current_page: None,
            pages: None,
        }
    }
}

/// Payload for creating a post or a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub content: String,
    pub url: String,
    pub tags: Vec<String>,
}

/// What a favorite toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteAction {
    Added,
    /// Anything other than "added"
    #[serde(other)]
    Removed,
}

/// Response of `POST /api/posts/{id}/favorite`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FavoriteToggle {
    pub action: FavoriteAction,
    pub favorite_count: i64,
}

impl FavoriteToggle {
    pub fn is_favorited(&self) -> bool {
        self.action == FavoriteAction::Added
    }
}

/// Server timestamps are naive ISO-8601 in UTC (`2024-05-01T12:00:00.123456`);
/// RFC 3339 with an explicit offset is accepted too.
mod server_timestamp {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        raw.parse::<NaiveDateTime>()
            .map(|naive| naive.and_utc())
            .map_err(|e| format!("invalid timestamp '{}': {}", raw, e))
    }
}
