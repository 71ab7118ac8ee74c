//! Test utilities
//!
//! Fixtures and a hand-written in-memory `FeedApi` for unit tests. The mock
//! records every call and can hold responses back, which is what the
//! pagination race tests need.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
