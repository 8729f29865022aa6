//! Holiday-exclusive schedule selection.
//!
//! An entry applies today iff its `holiday` flag equals `is_holiday_today`:
//! holiday-tagged entries only on holidays, plain entries only on regular
//! days. An entry never applies across both.

use crate::schedule::{start_minutes, ScheduleEntry};

/// Select and order the entries applicable today.
///
/// The kept entries are sorted ascending by start time parsed as minutes
/// since midnight (`"8:00"` and `"08:00"` sort identically); the sort is
/// stable, so authored order breaks ties. An unparseable start time sorts
/// first via the parse fallback of 0.
pub fn applicable(entries: &[ScheduleEntry], is_holiday_today: bool) -> Vec<ScheduleEntry> {
    let mut kept: Vec<ScheduleEntry> = entries
        .iter()
        .filter(|e| e.holiday == is_holiday_today)
        .cloned()
        .collect();
    kept.sort_by_key(|e| start_minutes(e).value());
    kept
}
