//! Compose modal
//!
//! One modal serves both new posts and replies. The reply target plays the
//! role of the form's hidden `reply_to_id` field.

use crate::domain::entities::{NewPost, PostId};
use crate::error::FeedError;

pub const NEW_POST_TITLE: &str = "新規投稿";
pub const REPLY_TITLE: &str = "返信を投稿";

/// Raw form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeForm {
    pub content: String,
    pub url: String,
    /// Comma separated, e.g. "rust, ai"
    pub tags: String,
}

impl ComposeForm {
    /// Validate and turn the form into a request payload
    ///
    /// A new post needs content and a URL; a reply only needs content.
    /// Blank checks ignore whitespace, but the text is sent as entered.
    pub fn into_draft(self, is_reply: bool) -> Result<NewPost, FeedError> {
        if self.content.trim().is_empty() {
            return Err(FeedError::Validation("content is required".to_string()));
        }

        if self.url.trim().is_empty() && !is_reply {
            return Err(FeedError::Validation("url is required".to_string()));
        }

        Ok(NewPost {
            tags: parse_tags(&self.tags),
            content: self.content,
            url: self.url,
        })
    }
}

/// Split a comma separated tag field into trimmed, non-empty names
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// State of the compose modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeModal {
    pub open: bool,
    pub reply_to: Option<PostId>,
}

impl ComposeModal {
    pub fn open_new_post(&mut self) {
        self.open = true;
        self.reply_to = None;
    }

    pub fn open_reply(&mut self, post_id: PostId) {
        self.open = true;
        self.reply_to = Some(post_id);
    }

    /// Close and reset back to new-post mode
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn title(&self) -> &'static str {
        if self.reply_to.is_some() {
            REPLY_TITLE
        } else {
            NEW_POST_TITLE
        }
    }

    pub fn url_required(&self) -> bool {
        self.reply_to.is_none()
    }
}
