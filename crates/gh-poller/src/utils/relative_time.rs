//! Human readable relative times ("3 minutes ago")

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Divide rounding half up
fn rounded(seconds: i64, unit: i64) -> i64 {
    (seconds + unit / 2) / unit
}

/// Describe how long before `now` the instant `then` was
///
/// Thresholds follow the usual "moment" style buckets. Instants in the
/// future (clock skew) read as "a few seconds ago".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);

    match seconds {
        s if s < 45 => "a few seconds ago".to_string(),
        s if s < 90 => "a minute ago".to_string(),
        s if s < 45 * MINUTE => format!("{} minutes ago", rounded(s, MINUTE)),
        s if s < 90 * MINUTE => "an hour ago".to_string(),
        s if s < 22 * HOUR => format!("{} hours ago", rounded(s, HOUR)),
        s if s < 36 * HOUR => "a day ago".to_string(),
        s if s < 26 * DAY => format!("{} days ago", rounded(s, DAY)),
        s if s < 45 * DAY => "a month ago".to_string(),
        s if s < 320 * DAY => format!("{} months ago", rounded(s, 30 * DAY)),
        s if s < 548 * DAY => "a year ago".to_string(),
        s => format!("{} years ago", rounded(s, 365 * DAY)),
    }
}
