//! View module
//!
//! Render-model nodes, pure renderers and relative time labels.

pub mod node;
pub mod renderer;
pub mod time;

pub use node::{
    tag_name_from_link, Avatar, DeleteConfirm, Header, LikeButton, Link, PageView, PostCard,
    Subtitle, TagChip, TagLink,
};
pub use renderer::{empty_notice, render_header, render_page, render_post, render_tag_chip};
pub use time::{format_elapsed_ms, relative_time};
