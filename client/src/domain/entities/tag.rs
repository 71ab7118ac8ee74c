//! Tag domain entity

use serde::{Deserialize, Serialize};

/// A tag with its usage count, as listed by `GET /api/tags/popular`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub count: u64,
}
