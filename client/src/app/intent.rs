//! User intents
//!
//! Everything a user can do to the feed view, as plain data. Rendered nodes
//! carry the intent their click produces, so bindings can be inspected
//! without a live UI.

use crate::app::compose::ComposeForm;
use crate::domain::entities::{PostId, UserId};

/// Distance from the bottom (px) at which the next page is requested
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Scroll position of the document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl ScrollMetrics {
    /// A viewport resting on the very bottom of the document
    pub fn at_bottom() -> Self {
        Self {
            scroll_top: 0.0,
            client_height: 0.0,
            scroll_height: 0.0,
        }
    }

    pub fn near_bottom(&self) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - SCROLL_THRESHOLD_PX
    }
}

/// Navigation bar items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Favorites,
    Profile,
}

impl std::fmt::Display for NavItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavItem::Home => write!(f, "ホーム"),
            NavItem::Favorites => write!(f, "お気に入り"),
            NavItem::Profile => write!(f, "プロフィール"),
        }
    }
}

/// What was under the pointer when a post card was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The card body itself, or plain text inside it
    Body,
    /// A nested link (author, content, tag)
    Link,
    /// A nested button (reply, like, delete)
    Button,
}

/// An explicit user action
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Initial page load: home feed and popular tags
    Start,
    Navigate(NavItem),
    /// "← ホームに戻る"
    BackToHome,
    /// Raw text of a clicked tag link or sidebar chip
    SelectTag(String),
    /// A tag name known exactly, spaces included
    SelectTagName(String),
    SelectUser {
        id: UserId,
        name: String,
    },
    OpenReplies {
        post_id: PostId,
        original: String,
    },
    Scrolled(ScrollMetrics),
    ToggleLike(PostId),
    OpenCompose,
    OpenReply(PostId),
    CloseCompose,
    SubmitCompose(ComposeForm),
    RequestDelete(PostId),
    CancelDelete,
    ConfirmDelete,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_top: f64, client_height: f64, scroll_height: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    #[test]
    fn near_bottom_within_threshold() {
        assert!(metrics(900.0, 1000.0, 2000.0).near_bottom());
        assert!(metrics(1000.0, 1000.0, 2000.0).near_bottom());
    }

    #[test]
    fn not_near_bottom_above_threshold() {
        assert!(!metrics(899.0, 1000.0, 2000.0).near_bottom());
        assert!(!metrics(0.0, 800.0, 5000.0).near_bottom());
    }

    #[test]
    fn at_bottom_is_near_bottom() {
        assert!(ScrollMetrics::at_bottom().near_bottom());
    }
}
