//! Per-entry time-window evaluation.
//!
//! Builds today's concrete window(s) from an entry's `HH:MM` bounds and
//! decides the (shutdown, activate) pair for "now". A midnight-crossing
//! entry (`start_hour` later in the day than `end_hour`) can contribute two
//! candidate windows: one starting today (ending tomorrow) when today's day
//! flag is set, and one continuing from yesterday (effective start 24 h
//! earlier) when yesterday's flag is set.

use chrono::{Duration, NaiveDateTime};

use crate::calendar::WeekdayTag;
use crate::config::EngineConfig;
use crate::schedule::{parse_time_of_day, ScheduleEntry};

/// Result of evaluating one entry against "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEval {
    /// The entry has no window covering today (day flags do not match, or
    /// its time bounds are unparseable).
    NotApplicable,
    /// The entry's retain/pulse decision. For retain entries the flags are
    /// complementary; for pulse entries both may be false.
    Evaluated { activate: bool, shutdown: bool },
}

/// Evaluate one filtered entry at the given local instant.
pub fn evaluate_entry(
    entry: &ScheduleEntry,
    now: NaiveDateTime,
    today: WeekdayTag,
    config: &EngineConfig,
) -> WindowEval {
    let (Some(start_time), Some(end_time)) = (
        parse_time_of_day(&entry.start_hour),
        parse_time_of_day(&entry.end_hour),
    ) else {
        return WindowEval::NotApplicable;
    };

    let date = now.date();
    let start = date.and_time(start_time);
    let end = date.and_time(end_time);

    // Candidate half-open windows; at most two for a crossing entry.
    let mut windows: Vec<(NaiveDateTime, NaiveDateTime)> = Vec::with_capacity(2);
    if start > end {
        // Midnight-crossing. A window starting today runs into tomorrow;
        // one started yesterday continues until today's end time.
        if entry.days_week.contains(today) {
            windows.push((start, end + Duration::hours(24)));
        }
        if entry.days_week.contains(today.prev()) {
            windows.push((start - Duration::hours(24), end));
        }
    } else if entry.days_week.contains(today) {
        windows.push((start, end));
    }

    if windows.is_empty() {
        return WindowEval::NotApplicable;
    }

    if entry.retain {
        // Level semantics: inside the half-open window means activate,
        // anywhere else (including exactly at `end`) means shutdown.
        let activate = windows.iter().any(|&(s, e)| s <= now && now < e);
        WindowEval::Evaluated {
            activate,
            shutdown: !activate,
        }
    } else {
        // Edge semantics: fire only within the tolerance of a start or end
        // instant. Correctness assumes tick cadence <= tolerance.
        let tolerance = config.pulse_tolerance;
        let activate = windows.iter().any(|&(s, _)| (now - s).abs() <= tolerance);
        let shutdown = windows.iter().any(|&(_, e)| (now - e).abs() <= tolerance);
        WindowEval::Evaluated { activate, shutdown }
    }
}
