//! Relative timestamps ("3分前")

use chrono::{DateTime, Utc};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

/// Label for a post created at `created_at`, seen at `now`
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_elapsed_ms((now - created_at).num_milliseconds())
}

/// Label for an age of `elapsed_ms` milliseconds
///
/// Negative ages (server clock ahead of ours) read as "now". Day counts are
/// unbounded; a two-year-old post reads "730日前".
pub fn format_elapsed_ms(elapsed_ms: i64) -> String {
    if elapsed_ms < MINUTE_MS {
        "now".to_string()
    } else if elapsed_ms < HOUR_MS {
        format!("{}分前", elapsed_ms / MINUTE_MS)
    } else if elapsed_ms < DAY_MS {
        format!("{}時間前", elapsed_ms / HOUR_MS)
    } else {
        format!("{}日前", elapsed_ms / DAY_MS)
    }
}
