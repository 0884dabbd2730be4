//! Relative "posted" labels derived from provider timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Epoch values above this are taken as milliseconds, below as seconds.
const EPOCH_MILLIS_THRESHOLD: u64 = 100_000_000_000;

/// Parse a provider timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD[ T]HH:MM:SS`, `YYYY-MM-DD`, and epoch
/// seconds or milliseconds (as number or numeric string).
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_i64().and_then(from_epoch),
        Value::String(s) => parse_timestamp_str(s.trim()),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|n| Utc.from_utc_datetime(&n));
    }
    s.parse::<i64>().ok().and_then(from_epoch)
}

fn from_epoch(raw: i64) -> Option<DateTime<Utc>> {
    if raw.unsigned_abs() >= EPOCH_MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(raw)
    } else {
        DateTime::from_timestamp(raw, 0)
    }
}

/// Human-relative age of `then` as seen from `now`.
///
/// Distance is absolute, so timestamps slightly in the future still read as
/// recent. Days are rounded up.
pub fn relative_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let millis = (now - then).num_milliseconds().abs();
    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;

    match days {
        0 => "today".to_string(),
        d if d < 7 => plural(d, "day"),
        d if d < 30 => plural(div_ceil(d, 7), "week"),
        d => plural(div_ceil(d, 30), "month"),
    }
}

/// Relative label for a raw timestamp field, if it parses.
pub fn posted_label(value: Option<&Value>, now: DateTime<Utc>) -> Option<String> {
    value
        .and_then(parse_timestamp)
        .map(|then| relative_age(then, now))
}

fn div_ceil(n: i64, d: i64) -> i64 {
    (n + d - 1) / d
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
