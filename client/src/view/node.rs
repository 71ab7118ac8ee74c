//! View nodes
//!
//! A description of what is on screen, independent of the rendering target.
//! Interactive nodes carry the `Intent` their click dispatches.

use crate::app::compose::ComposeModal;
use crate::app::intent::{ClickTarget, Intent, NavItem};
use crate::domain::entities::{FavoriteToggle, PostId};

pub const BACK_TO_HOME: &str = "← ホームに戻る";

/// Page header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub subtitle: Subtitle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subtitle {
    Text(String),
    /// Only the "back to home" link
    BackLink,
    /// The replied-to post's content, followed by the back link
    ReplyContext { original: String },
}

impl Subtitle {
    pub fn has_back_link(&self) -> bool {
        !matches!(self, Subtitle::Text(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub src: String,
    pub alt: String,
}

/// `#tag` link inside a post card
#[derive(Debug, Clone, PartialEq)]
pub struct TagLink {
    pub link: Link,
    pub on_click: Intent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeButton {
    pub active: bool,
    pub count: i64,
}

impl LikeButton {
    /// Material icon name for the current state
    pub fn icon(&self) -> &'static str {
        if self.active {
            "favorite"
        } else {
            "favorite_border"
        }
    }

    /// Patch from a toggle response; no local arithmetic, the server count wins
    pub fn apply(&mut self, toggle: &FavoriteToggle) {
        self.active = toggle.is_favorited();
        self.count = toggle.favorite_count;
    }
}

/// One rendered post
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub post_id: PostId,
    pub avatar: Avatar,
    pub author_name: String,
    pub on_author_click: Intent,
    pub time_label: String,
    pub content: Link,
    pub tags: Vec<TagLink>,
    pub reply_count: i64,
    pub like: LikeButton,
    /// Only the viewer's own posts can be deleted
    pub show_delete: bool,
    on_body_click: Intent,
}

impl PostCard {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        post_id: PostId,
        avatar: Avatar,
        author_name: String,
        on_author_click: Intent,
        time_label: String,
        content: Link,
        tags: Vec<TagLink>,
        reply_count: i64,
        like: LikeButton,
        show_delete: bool,
        on_body_click: Intent,
    ) -> Self {
        Self {
            post_id,
            avatar,
            author_name,
            on_author_click,
            time_label,
            content,
            tags,
            reply_count,
            like,
            show_delete,
            on_body_click,
        }
    }

    /// Intent for a click that landed somewhere on the card
    ///
    /// Clicks on nested links and buttons belong to those elements; only a
    /// click on the body opens the replies.
    pub fn click(&self, target: ClickTarget) -> Option<Intent> {
        match target {
            ClickTarget::Body => Some(self.on_body_click.clone()),
            ClickTarget::Link | ClickTarget::Button => None,
        }
    }

    pub fn on_like_click(&self) -> Intent {
        Intent::ToggleLike(self.post_id)
    }

    pub fn on_reply_click(&self) -> Intent {
        Intent::OpenReply(self.post_id)
    }

    pub fn on_delete_click(&self) -> Option<Intent> {
        self.show_delete.then_some(Intent::RequestDelete(self.post_id))
    }
}

/// Popular tag in the sidebar
#[derive(Debug, Clone, PartialEq)]
pub struct TagChip {
    pub name: String,
    pub count: u64,
    pub on_click: Intent,
}

impl TagChip {
    /// Visible text, "#name count"
    pub fn text(&self) -> String {
        format!("#{} {}", self.name, self.count)
    }
}

/// Delete confirmation overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirm {
    pub post_id: PostId,
}

impl DeleteConfirm {
    pub const TITLE: &'static str = "投稿の削除";
    pub const MESSAGE: &'static str = "この投稿を削除してもよろしいですか？";
    pub const WARNING: &'static str = "この操作は取り消せません。";
    pub const CONFIRM: &'static str = "削除する";
    pub const CANCEL: &'static str = "キャンセル";
}

/// Everything on screen
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub header: Header,
    pub active_nav: Option<NavItem>,
    pub cards: Vec<PostCard>,
    /// Shown instead of cards when a list came back empty
    pub notice: Option<String>,
    pub popular_tags: Vec<TagChip>,
    pub compose: ComposeModal,
    pub delete_confirm: Option<DeleteConfirm>,
    /// "page / pages" from the last list envelope, when the server sent it
    pub page_info: Option<(u32, u32)>,
}

impl PageView {
    pub fn card(&self, post_id: PostId) -> Option<&PostCard> {
        self.cards.iter().find(|c| c.post_id == post_id)
    }

    pub fn card_mut(&mut self, post_id: PostId) -> Option<&mut PostCard> {
        self.cards.iter_mut().find(|c| c.post_id == post_id)
    }
}

/// Tag name from the text of a rendered tag link or sidebar chip
///
/// Drops the leading `#`, trims, and keeps the first word so "#rust 12"
/// yields "rust". Applying it to its own output is a no-op.
pub fn tag_name_from_link(text: &str) -> String {
    let trimmed = text.trim();
    let without_hash = trimmed.strip_prefix('#').unwrap_or(trimmed);
    without_hash
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}
