//! AI Talk Gallery client
//!
//! Feed client for the AI Talk Gallery: a timeline of shared ChatGPT
//! conversations with tags, replies, favorites and infinite scrolling.
//! Uses hexagonal (ports & adapters) architecture: the feed logic only
//! sees the `FeedApi` port, and `HttpFeedApi` is the REST adapter.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use adapters::HttpFeedApi;
pub use app::{FeedController, FeedState, Intent};
pub use config::Config;
pub use domain::ports::FeedApi;
pub use error::{ApiError, FeedError};
