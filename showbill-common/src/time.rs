//! Timestamp utilities

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

/// Format used when a show's start time is attached to listing rows
pub const SHOW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Naive input layouts accepted from the show form, tried in order
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Display styles for dates on rendered pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// e.g. `Tue 05, 21, 2019 9:30PM`
    Medium,
    /// e.g. `Tuesday May, 21, 2019 at 9:30PM`
    Full,
}

/// Render a start time the way listing rows carry it
pub fn format_show_time(value: &DateTime<Utc>) -> String {
    value.format(SHOW_TIME_FORMAT).to_string()
}

pub fn format_datetime(value: &DateTime<Utc>, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
    };
    value.format(pattern).to_string()
}

/// Parse a start time submitted through the show form
///
/// Accepts RFC 3339 (any offset, converted to UTC) or a naive date-time which
/// is taken as UTC. Sub-second precision is dropped.
pub fn parse_start_time(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let parsed = DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            INPUT_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
                .map(|naive| naive.and_utc())
        })?;

    parsed.with_nanosecond(0)
}
