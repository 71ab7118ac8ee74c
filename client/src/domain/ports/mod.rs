//! Domain ports (traits)
//!
//! Adapters provide concrete implementations of these traits.

pub mod feed_api;

pub use feed_api::FeedApi;
