//! Domain layer
//!
//! - `entities`: posts, tags and view modes
//! - `ports`: the trait the controller needs from the backend

pub mod entities;
pub mod ports;
