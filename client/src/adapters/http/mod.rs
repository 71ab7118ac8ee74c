//! HTTP adapter
//!
//! reqwest implementation of the gallery REST API.

pub mod client;

pub use client::HttpFeedApi;
