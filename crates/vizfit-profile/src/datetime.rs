//! ISO 8601 date and datetime recognition.

use std::sync::LazyLock;

use chrono::{FixedOffset, NaiveDate, NaiveTime};
use regex::Regex;

/// `YYYY-MM-DD`, optionally followed by `THH:MM[:SS[.fff]]` and a `Z` or
/// `±HH:MM` offset.
static ISO8601_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4}-\d{2}-\d{2})(?:T(\d{2}:\d{2}(?::\d{2}(?:\.\d+)?)?)(Z|[+-]\d{2}:\d{2})?)?$",
    )
    .expect("Invalid ISO 8601 regex")
});

/// True when `value` is an ISO 8601 date or datetime naming a real
/// calendar instant.
///
/// The pattern is checked first; the calendar parse then rejects values
/// such as `2020-02-30` or `24:00`.
pub fn is_iso8601(value: &str) -> bool {
    let Some(caps) = ISO8601_REGEX.captures(value) else {
        return false;
    };

    if NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").is_err() {
        return false;
    }
    if let Some(time) = caps.get(2) {
        let format = if time.as_str().len() == 5 {
            "%H:%M"
        } else {
            "%H:%M:%S%.f"
        };
        if NaiveTime::parse_from_str(time.as_str(), format).is_err() {
            return false;
        }
    }
    match caps.get(3) {
        None => true,
        Some(offset) if offset.as_str() == "Z" => true,
        Some(offset) => parse_offset(offset.as_str()).is_some(),
    }
}

fn parse_offset(offset: &str) -> Option<FixedOffset> {
    let sign = if offset.starts_with('-') { -1 } else { 1 };
    let hours: i32 = offset.get(1..3)?.parse().ok()?;
    let minutes: i32 = offset.get(4..6)?.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
