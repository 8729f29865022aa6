//! Multi-schedule aggregation, conflict precedence, and the exclusion gate.
//!
//! Merges per-entry window results into one final [`Decision`]:
//!
//! 1. OR the (activate, shutdown) flags across all applicable entries;
//!    shutdown wins a conflict.
//! 2. A holiday with zero applicable entries forces shutdown
//!    (`holiday_no_schedule`) -- explicitly off, not a fall-through.
//! 3. An excluded day forces shutdown (`excluded`) over everything above.
//!
//! Reason precedence, first match wins:
//! `excluded` > `holiday_no_schedule` > `holiday` > `weekday`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calendar::{self, CalendarContext};
use crate::config::EngineConfig;
use crate::filter;
use crate::schedule::ScheduleEntry;
use crate::window::{evaluate_entry, WindowEval};

/// Why the final decision came out the way it did. Defaults to the
/// ordinary-weekday case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    #[default]
    Weekday,
    Holiday,
    HolidayNoSchedule,
    Excluded,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::Weekday => "weekday",
            Reason::Holiday => "holiday",
            Reason::HolidayNoSchedule => "holiday_no_schedule",
            Reason::Excluded => "excluded",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one binary answer per tick. `should_activate` and `should_shutdown`
/// are never both true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub should_activate: bool,
    pub should_shutdown: bool,
    pub reason: Reason,
}

/// A full evaluation result: the decision plus the material the
/// observability recorder snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub decision: Decision,
    /// The first applicable entry whose own flags agree with the final
    /// action, if any.
    pub winning_schedule: Option<ScheduleEntry>,
    pub context: CalendarContext,
    /// Count of configured (not just applicable) entries.
    pub total_schedules: usize,
}

/// Evaluate a device's full schedule set at the given local instant.
///
/// Returns `None` when the device has no configured schedules at all -- the
/// tick is skipped with a warning, and no decision is produced. This is
/// distinct from `holiday_no_schedule`, which requires at least one
/// configured entry that simply is not holiday-tagged.
///
/// Evaluation is pure: identical inputs yield an identical result.
pub fn evaluate(
    entries: &[ScheduleEntry],
    holidays: &[String],
    excluded_days: &[String],
    now: NaiveDateTime,
    config: &EngineConfig,
) -> Option<Evaluation> {
    let context = calendar::resolve(now, holidays, excluded_days);

    if entries.is_empty() {
        warn!(today = %context.today_key, "no schedules configured, skipping evaluation");
        return None;
    }

    let applicable = filter::applicable(entries, context.is_holiday_today);
    let today = context.current_week_day;

    // Per-entry flags, keeping the entry alongside for the winner snapshot.
    let evaluated: Vec<(&ScheduleEntry, bool, bool)> = applicable
        .iter()
        .filter_map(|entry| match evaluate_entry(entry, now, today, config) {
            WindowEval::NotApplicable => None,
            WindowEval::Evaluated { activate, shutdown } => Some((entry, activate, shutdown)),
        })
        .collect();

    let any_activate = evaluated.iter().any(|&(_, activate, _)| activate);
    let any_shutdown = evaluated.iter().any(|&(_, _, shutdown)| shutdown);

    let (mut should_activate, mut should_shutdown) = match (any_activate, any_shutdown) {
        (true, false) => (true, false),
        // Shutdown wins a conflict.
        (_, true) => (false, true),
        (false, false) => (false, false),
    };
    let mut reason = if context.is_holiday_today {
        Reason::Holiday
    } else {
        Reason::Weekday
    };

    // A holiday with no holiday-tagged schedule means explicitly off.
    if context.is_holiday_today && applicable.is_empty() {
        should_activate = false;
        should_shutdown = true;
        reason = Reason::HolidayNoSchedule;
    }

    // Final gate: an excluded day overrides everything above.
    if context.is_excluded_today {
        should_activate = false;
        should_shutdown = true;
        reason = Reason::Excluded;
    }

    let winning_schedule = if should_activate {
        evaluated
            .iter()
            .find(|&&(_, activate, _)| activate)
            .map(|&(entry, _, _)| entry.clone())
    } else if should_shutdown {
        evaluated
            .iter()
            .find(|&&(_, _, shutdown)| shutdown)
            .map(|&(entry, _, _)| entry.clone())
    } else {
        None
    };

    Some(Evaluation {
        decision: Decision {
            should_activate,
            should_shutdown,
            reason,
        },
        winning_schedule,
        context,
        total_schedules: entries.len(),
    })
}
