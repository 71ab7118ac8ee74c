//! View renderer
//!
//! Pure functions from domain snapshots to view nodes, plus a plain-text
//! rendering of a whole page for terminals.

use chrono::{DateTime, Utc};

use crate::app::intent::{Intent, NavItem};
use crate::domain::entities::{Post, Tag, ViewMode};
use crate::view::node::{
    Avatar, DeleteConfirm, Header, LikeButton, Link, PageView, PostCard, Subtitle, TagChip,
    TagLink, BACK_TO_HOME,
};
use crate::view::time::relative_time;

pub const HOME_TITLE: &str = "AI Talk Gallery";
pub const HOME_SUBTITLE: &str = "ChatGPTとの面白い会話集";

/// Render one post into a card
pub fn render_post(post: &Post, now: DateTime<Utc>) -> PostCard {
    let tags = post
        .tags
        .iter()
        .map(|tag| TagLink {
            link: Link {
                href: format!("/tags/{}", tag),
                text: format!("#{}", tag),
            },
            on_click: Intent::SelectTagName(tag.clone()),
        })
        .collect();

    PostCard::new(
        post.id,
        Avatar {
            src: post.author.avatar_url.clone(),
            alt: post.author.name.clone(),
        },
        post.author.name.clone(),
        Intent::SelectUser {
            id: post.author.id,
            name: post.author.name.clone(),
        },
        relative_time(post.created_at, now),
        Link {
            href: post.url.clone(),
            text: post.content.clone(),
        },
        tags,
        post.reply_count,
        LikeButton {
            active: post.is_favorited,
            count: post.favorite_count,
        },
        post.is_own,
        Intent::OpenReplies {
            post_id: post.id,
            original: post.content.clone(),
        },
    )
}

/// Render a popular tag into a sidebar chip
pub fn render_tag_chip(tag: &Tag) -> TagChip {
    TagChip {
        name: tag.name.clone(),
        count: tag.count,
        on_click: Intent::SelectTagName(tag.name.clone()),
    }
}

/// Header for a view mode
pub fn render_header(mode: &ViewMode) -> Header {
    match mode {
        ViewMode::Home => Header {
            title: HOME_TITLE.to_string(),
            subtitle: Subtitle::Text(HOME_SUBTITLE.to_string()),
        },
        ViewMode::Tag { name } => Header {
            title: format!("#{}", name),
            subtitle: Subtitle::BackLink,
        },
        ViewMode::User { name, .. } => Header {
            title: format!("{}の投稿", name),
            subtitle: Subtitle::BackLink,
        },
        ViewMode::Replies { original, .. } => Header {
            title: "リプライ一覧".to_string(),
            subtitle: Subtitle::ReplyContext {
                original: original.clone(),
            },
        },
        ViewMode::Favorites => Header {
            title: "お気に入り".to_string(),
            subtitle: Subtitle::Text("お気に入りに追加した投稿".to_string()),
        },
    }
}

/// Placeholder text for an empty first page, where the mode has one
pub fn empty_notice(mode: &ViewMode) -> Option<&'static str> {
    match mode {
        ViewMode::Replies { .. } => Some("まだリプライはありません。"),
        ViewMode::Favorites => Some("お気に入りの投稿はありません。"),
        _ => None,
    }
}

/// Render a whole page as plain text
///
/// Cards are numbered from 1 so a terminal user can refer to them.
pub fn render_page(page: &PageView) -> String {
    let mut buf = String::new();

    buf.push_str(&render_nav(page.active_nav));
    buf.push('\n');

    buf.push_str(&format!("# {}\n", page.header.title));
    match &page.header.subtitle {
        Subtitle::Text(text) => buf.push_str(&format!("{}\n", text)),
        Subtitle::BackLink => buf.push_str(&format!("{}\n", BACK_TO_HOME)),
        Subtitle::ReplyContext { original } => {
            buf.push_str("元の投稿：\n");
            buf.push_str(&format!("> {}\n", original));
            buf.push_str(&format!("{}\n", BACK_TO_HOME));
        }
    }
    buf.push('\n');

    if page.cards.is_empty() {
        if let Some(notice) = &page.notice {
            buf.push_str(&format!("_{}_\n\n", notice));
        }
    } else {
        for (i, card) in page.cards.iter().enumerate() {
            buf.push_str(&render_card(i + 1, card));
            buf.push('\n');
        }
    }

    if let Some((current, total)) = page.page_info {
        buf.push_str(&format!("Page {}/{}\n\n", current, total));
    }

    if !page.popular_tags.is_empty() {
        buf.push_str("## Popular tags\n\n");
        let chips: Vec<String> = page.popular_tags.iter().map(|c| c.text()).collect();
        buf.push_str(&chips.join("  "));
        buf.push_str("\n\n");
    }

    if page.compose.open {
        buf.push_str(&format!("## {}\n", page.compose.title()));
        if page.compose.url_required() {
            buf.push_str("(url required)\n");
        }
        buf.push('\n');
    }

    if let Some(confirm) = &page.delete_confirm {
        buf.push_str(&format!("## {}\n", DeleteConfirm::TITLE));
        buf.push_str(&format!("{}\n", DeleteConfirm::MESSAGE));
        buf.push_str(&format!("{}\n", DeleteConfirm::WARNING));
        buf.push_str(&format!(
            "[{}] [{}] (post {})\n\n",
            DeleteConfirm::CANCEL,
            DeleteConfirm::CONFIRM,
            confirm.post_id
        ));
    }

    buf
}

fn render_nav(active: Option<NavItem>) -> String {
    [NavItem::Home, NavItem::Favorites, NavItem::Profile]
        .iter()
        .map(|item| {
            if Some(*item) == active {
                format!("[{}]", item)
            } else {
                item.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_card(index: usize, card: &PostCard) -> String {
    let mut buf = format!("[{}] {} · {}\n", index, card.author_name, card.time_label);
    buf.push_str(&format!("    {}\n", card.content.text));
    if !card.content.href.is_empty() {
        buf.push_str(&format!("    {}\n", card.content.href));
    }
    if !card.tags.is_empty() {
        let tags: Vec<&str> = card.tags.iter().map(|t| t.link.text.as_str()).collect();
        buf.push_str(&format!("    {}\n", tags.join(" ")));
    }

    let heart = if card.like.active { "♥" } else { "♡" };
    let mut meta = format!("    replies {} | {} {}", card.reply_count, heart, card.like.count);
    if card.show_delete {
        meta.push_str(" | delete");
    }
    buf.push_str(&meta);
    buf.push('\n');

    buf
}
