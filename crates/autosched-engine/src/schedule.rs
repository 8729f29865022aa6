//! Schedule entry types and lenient time-of-day parsing.
//!
//! A [`ScheduleEntry`] is authored externally (schedule editors, config
//! stores) and read-only to the engine. Field names follow the persisted
//! camelCase layout (`startHour`, `daysWeek`, ...). The day-of-week flags are
//! a fixed structure over the seven weekday tags -- a key missing from the
//! serialized input defaults to `false`, it never becomes "unknown".

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::calendar::WeekdayTag;
use crate::error::{EngineError, Result};

/// Per-weekday applicability flags. All seven keys are always present once
/// deserialized; absent input keys default to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DaysWeek {
    #[serde(default)]
    pub mon: bool,
    #[serde(default)]
    pub tue: bool,
    #[serde(default)]
    pub wed: bool,
    #[serde(default)]
    pub thu: bool,
    #[serde(default)]
    pub fri: bool,
    #[serde(default)]
    pub sat: bool,
    #[serde(default)]
    pub sun: bool,
}

impl DaysWeek {
    /// Whether the flag for the given weekday tag is set.
    pub fn contains(&self, day: WeekdayTag) -> bool {
        match day {
            WeekdayTag::Mon => self.mon,
            WeekdayTag::Tue => self.tue,
            WeekdayTag::Wed => self.wed,
            WeekdayTag::Thu => self.thu,
            WeekdayTag::Fri => self.fri,
            WeekdayTag::Sat => self.sat,
            WeekdayTag::Sun => self.sun,
        }
    }
}

/// One authored schedule window for a device group.
///
/// `start_hour`/`end_hour` are `HH:MM` strings (a single-digit hour like
/// `"8:00"` is accepted). A `start_hour` later in the day than `end_hour`
/// encodes a midnight-crossing window spanning two calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub start_hour: String,
    pub end_hour: String,
    #[serde(default)]
    pub days_week: DaysWeek,
    /// Holiday-exclusive flag: `true` means the entry applies only on
    /// holidays, `false` only on non-holidays. Never both.
    #[serde(default)]
    pub holiday: bool,
    /// `true` for a level (retain) window, `false` for an edge (pulse) one.
    #[serde(default)]
    pub retain: bool,
}

impl ScheduleEntry {
    /// Strict validation of the authored time-of-day strings, intended for
    /// config load time. Evaluation itself stays lenient and simply skips
    /// entries it cannot parse.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidTimeOfDay`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if parse_time_of_day(&self.start_hour).is_none() {
            return Err(EngineError::InvalidTimeOfDay {
                field: "startHour",
                value: self.start_hour.clone(),
            });
        }
        if parse_time_of_day(&self.end_hour).is_none() {
            return Err(EngineError::InvalidTimeOfDay {
                field: "endHour",
                value: self.end_hour.clone(),
            });
        }
        Ok(())
    }
}

/// Outcome of a parse-or-default: either the parsed value or an explicit,
/// caller-chosen fallback. Callers that only need the value call
/// [`ParseOutcome::value`]; callers that care whether parsing succeeded can
/// branch on the variant instead of relying on swallowed errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    Parsed(T),
    Fallback(T),
}

impl<T> ParseOutcome<T> {
    pub fn value(self) -> T {
        match self {
            ParseOutcome::Parsed(v) | ParseOutcome::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ParseOutcome::Fallback(_))
    }
}

/// Parse an `HH:MM` time-of-day string. `"8:00"` and `"08:00"` are
/// equivalent. Returns `None` for anything else (out-of-range hour or
/// minute, trailing garbage, empty string).
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

/// The entry's start time as minutes since midnight, falling back to 0 when
/// `start_hour` is unparseable so ordering stays total.
pub fn start_minutes(entry: &ScheduleEntry) -> ParseOutcome<u32> {
    use chrono::Timelike;
    match parse_time_of_day(&entry.start_hour) {
        Some(t) => ParseOutcome::Parsed(t.hour() * 60 + t.minute()),
        None => ParseOutcome::Fallback(0),
    }
}
