//! Timestamp helpers: epoch seconds in and out.

use chrono::{Local, TimeZone};

/// Current time as epoch seconds (what the snapshot and log store).
pub fn now_ts() -> i64 {
    Local::now().timestamp()
}

/// Format an epoch-seconds timestamp as local wall-clock time for display.
/// `0` means "never recorded".
pub fn format_ts(ts: i64) -> String {
    if ts == 0 {
        return "never".to_string();
    }
    match Local.timestamp_opt(ts, 0) {
        chrono::LocalResult::Single(dt) => dt.format("%d-%m-%Y %H:%M:%S").to_string(),
        _ => format!("@{}", ts),
    }
}

/// Short HH:MM:SS form used in interval listings.
pub fn format_ts_time(ts: i64) -> String {
    match Local.timestamp_opt(ts, 0) {
        chrono::LocalResult::Single(dt) => dt.format("%H:%M:%S").to_string(),
        _ => format!("@{}", ts),
    }
}
