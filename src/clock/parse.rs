use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use dioxus::logger::tracing::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::ClockError;

/// A loosely typed time input: a clock-time or date string, or an instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Text(String),
    Instant(DateTime<Utc>),
}

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        TimeValue::Text(value.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(value: String) -> Self {
        TimeValue::Text(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeValue {
    fn from(value: DateTime<Tz>) -> Self {
        TimeValue::Instant(value.with_timezone(&Utc))
    }
}

// Naive formats read as local wall-clock time.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn clock_regex() -> &'static Regex {
    static REGEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{1,2})(?::(\d{1,2}))?$").unwrap());
    &REGEX
}

/// Resolves `value` to an instant; clock times land on `today`'s local date.
/// `None` means no value was supplied or it could not be read.
pub fn parse_time_value_at(
    value: Option<&TimeValue>,
    today: DateTime<Local>,
) -> Option<DateTime<Utc>> {
    match value? {
        TimeValue::Instant(at) => Some(*at),
        TimeValue::Text(text) if text.is_empty() => None,
        TimeValue::Text(text) => {
            let parsed = parse_clock_time(text, today).or_else(|| parse_date_text(text.trim()));
            if parsed.is_none() {
                debug!("[parse] ignoring unparsable time value {:?}", text);
            }
            parsed
        }
    }
}

/// `H:MM[:SS]` on today's date. Out-of-range fields roll over like a calendar.
fn parse_clock_time(text: &str, today: DateTime<Local>) -> Option<DateTime<Utc>> {
    let caps = clock_regex().captures(text)?;
    let field = |i: usize| -> Option<i64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };
    let (hours, minutes, seconds) = (field(1)?, field(2)?, field(3)?);

    let midnight = today.date_naive().and_hms_opt(0, 0, 0)?;
    let naive = midnight
        + Duration::hours(hours)
        + Duration::minutes(minutes)
        + Duration::seconds(seconds);
    local_naive_to_utc(naive).ok()
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(at) = DateTime::parse_from_rfc2822(text) {
        return Some(at.with_timezone(&Utc));
    }
    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return local_naive_to_utc(naive).ok();
        }
    }
    // Date-only strings are UTC midnight
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Interprets a wall-clock time in the system timezone. Repeated times pick the earlier instant.
pub(crate) fn local_naive_to_utc(naive: NaiveDateTime) -> Result<DateTime<Utc>, ClockError> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(at) | LocalResult::Ambiguous(at, _) => Ok(at.with_timezone(&Utc)),
        LocalResult::None => Err(ClockError::NonexistentLocalTime(naive)),
    }
}
