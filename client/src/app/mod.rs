//! Application layer
//!
//! The feed state machine and the controller that runs its effects.
//! `FeedState` is pure; `FeedController` owns it and talks to a `FeedApi`.

pub mod compose;
pub mod controller;
pub mod intent;
pub mod state;

pub use compose::{parse_tags, ComposeForm, ComposeModal};
pub use controller::{run_effect, FeedController};
pub use intent::{ClickTarget, Intent, NavItem, ScrollMetrics, SCROLL_THRESHOLD_PX};
pub use state::{Effect, FeedRequest, FeedState, Outcome, Pagination};
