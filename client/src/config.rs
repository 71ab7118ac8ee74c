use std::env;
use std::time::Duration;

use crate::domain::entities::{UserId, Viewer};
use crate::error::FeedError;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the gallery server; `/api/...` paths are appended
    pub api_base_url: String,
    /// Raw `Cookie` header value carrying the login session
    pub session_cookie: Option<String>,
    /// Signed-in user, needed for the profile navigation item
    pub viewer: Option<Viewer>,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, FeedError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FeedError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup("GALLERY_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                FeedError::Config(format!("GALLERY_TIMEOUT_SECS must be a number, got '{}'", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let viewer = match lookup("GALLERY_VIEWER_ID") {
            Some(raw) => {
                let id = raw.parse::<UserId>().map_err(FeedError::Config)?;
                let name = lookup("GALLERY_VIEWER_NAME").unwrap_or_else(|| id.to_string());
                Some(Viewer { id, name })
            }
            None => None,
        };

        Ok(Self {
            api_base_url: lookup("GALLERY_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            session_cookie: lookup("GALLERY_SESSION_COOKIE").filter(|c| !c.trim().is_empty()),
            viewer,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
