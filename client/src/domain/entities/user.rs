//! User domain entities
//!
//! Post authors as embedded by the server, and the optional local viewer.

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(UserId)
            .map_err(|_| format!("Invalid user id: {}", s))
    }
}

/// Author of a post, embedded in every post payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: UserId,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    /// Avatar image URL (`profile_pic` on the wire)
    #[serde(
        rename = "profile_pic",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub avatar_url: String,
}

/// The signed-in user, when known locally
///
/// Only used to open the viewer's own posts from the profile navigation item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: UserId,
    pub name: String,
}

/// Helper to deserialize null as default (empty string, zero, empty vec)
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_null_avatar_decodes_empty() {
        let author: Author =
            serde_json::from_str(r#"{"id": 7, "name": "hana", "profile_pic": null}"#).unwrap();
        assert_eq!(author.id, UserId(7));
        assert_eq!(author.name, "hana");
        assert_eq!(author.avatar_url, "");
    }

    #[test]
    fn user_id_from_str() {
        assert_eq!(" 42 ".parse::<UserId>().unwrap(), UserId(42));
        assert!("abc".parse::<UserId>().is_err());
    }
}
