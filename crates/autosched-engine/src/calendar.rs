//! Calendar resolution -- classifies "today" as holiday/excluded/weekday.
//!
//! Holiday and excluded-day lists come from authored configuration and may
//! contain arbitrary date-like strings. Parsing is best-effort: a malformed
//! entry is discarded silently. It never errors and never matches.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Lowercase 3-letter weekday tag, matching the `daysWeek` field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayTag {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl WeekdayTag {
    pub fn as_str(self) -> &'static str {
        match self {
            WeekdayTag::Sun => "sun",
            WeekdayTag::Mon => "mon",
            WeekdayTag::Tue => "tue",
            WeekdayTag::Wed => "wed",
            WeekdayTag::Thu => "thu",
            WeekdayTag::Fri => "fri",
            WeekdayTag::Sat => "sat",
        }
    }

    /// The preceding weekday -- "yesterday" for midnight-crossing windows.
    pub fn prev(self) -> WeekdayTag {
        match self {
            WeekdayTag::Sun => WeekdayTag::Sat,
            WeekdayTag::Mon => WeekdayTag::Sun,
            WeekdayTag::Tue => WeekdayTag::Mon,
            WeekdayTag::Wed => WeekdayTag::Tue,
            WeekdayTag::Thu => WeekdayTag::Wed,
            WeekdayTag::Fri => WeekdayTag::Thu,
            WeekdayTag::Sat => WeekdayTag::Fri,
        }
    }
}

impl From<Weekday> for WeekdayTag {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sun => WeekdayTag::Sun,
            Weekday::Mon => WeekdayTag::Mon,
            Weekday::Tue => WeekdayTag::Tue,
            Weekday::Wed => WeekdayTag::Wed,
            Weekday::Thu => WeekdayTag::Thu,
            Weekday::Fri => WeekdayTag::Fri,
            Weekday::Sat => WeekdayTag::Sat,
        }
    }
}

impl std::fmt::Display for WeekdayTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the resolver knows about "today". Recomputed every tick from the
/// current wall clock and the raw date lists; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarContext {
    /// Canonical `YYYY-MM-DD` key for the local calendar day.
    pub today_key: String,
    pub is_holiday_today: bool,
    pub is_excluded_today: bool,
    pub current_week_day: WeekdayTag,
}

/// Canonical `YYYY-MM-DD` key for a calendar day.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Best-effort parse of a raw date-like string into a calendar day.
///
/// Accepted forms, in order: `YYYY-MM-DD`, a local `YYYY-MM-DDTHH:MM:SS`
/// datetime, an RFC 3339 datetime (the date is taken in its stated offset),
/// and an epoch-milliseconds integer (taken as UTC). Anything else yields
/// `None`.
pub fn parse_day_key(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(ms) = raw.parse::<i64>() {
        return DateTime::from_timestamp_millis(ms).map(|dt| dt.date_naive());
    }
    None
}

/// Resolve the calendar context for the given local wall-clock instant.
///
/// Membership in the holiday/excluded lists is decided by canonical day key
/// equality; list entries that fail to parse are skipped.
pub fn resolve(now: NaiveDateTime, holidays: &[String], excluded_days: &[String]) -> CalendarContext {
    let today = now.date();
    let matches_today = |raw: &String| parse_day_key(raw).is_some_and(|d| d == today);

    CalendarContext {
        today_key: day_key(today),
        is_holiday_today: holidays.iter().any(matches_today),
        is_excluded_today: excluded_days.iter().any(matches_today),
        current_week_day: WeekdayTag::from(today.weekday()),
    }
}
