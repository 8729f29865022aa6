//! Retention sweep over the log store.
//!
//! Deletes every record strictly older than a cutoff derived from a
//! day-window. Timestamp recovery prefers the epoch-ms suffix embedded in
//! the log key, then falls back to the record body (`timestampMs`, then the
//! RFC 3339 `timestamp`). A record whose timestamp cannot be recovered is
//! retained -- the sweep fails open and never destroys unidentifiable data.
//!
//! Intended for periodic (e.g., daily) invocation, not per-tick. Because the
//! cutoff is always days in the past, racing a fresh write can at most delay
//! its eviction by one sweep cycle, never delete it.

use chrono::{DateTime, Days, Duration, NaiveTime, TimeZone};
use serde::Serialize;
use tracing::{debug, info};

use autosched_engine::calendar::day_key;

use crate::error::StoreResult;
use crate::record::ObservabilityRecord;
use crate::store::LogStore;

/// Default retention window in days.
pub const DEFAULT_DAYS_TO_KEEP: u32 = 4;

/// Summary of one sweep run. `total_after + deleted == total_before` always
/// holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    pub total_before: usize,
    pub total_after: usize,
    pub deleted: usize,
    pub retained: usize,
    /// Canonical `YYYY-MM-DD` of the cutoff day. Records from this day on
    /// survive.
    pub cutoff_date: String,
    pub days_kept: u32,
    /// RFC 3339 instant the sweep ran.
    pub executed_at: String,
}

/// Recover a record's epoch-ms timestamp, preferring the key suffix.
///
/// Key format is `automation_log_<name>_<epochMs>`, so the segment after the
/// last underscore is tried first. Returns `None` when no source parses.
pub fn record_timestamp_ms(key: &str, record: &ObservabilityRecord) -> Option<i64> {
    if let Some(suffix) = key.rsplit('_').next() {
        if let Ok(ms) = suffix.parse::<i64>() {
            return Some(ms);
        }
    }
    if let Some(ms) = record.log_data.timestamp_ms {
        return Some(ms);
    }
    record
        .log_data
        .timestamp
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.timestamp_millis())
}

/// Delete every record strictly older than the retention cutoff.
///
/// The cutoff is the local start of day `days_to_keep` days before `now`; a
/// record timestamped exactly at the cutoff is retained. Records with an
/// unrecoverable timestamp are retained.
///
/// # Errors
/// Propagates store failures; records already examined stay deleted.
pub fn sweep<Tz: TimeZone>(
    store: &mut dyn LogStore,
    days_to_keep: u32,
    now: DateTime<Tz>,
) -> StoreResult<SweepReport>
where
    Tz::Offset: std::fmt::Display,
{
    let today = now.date_naive();
    let cutoff_day = today
        .checked_sub_days(Days::new(u64::from(days_to_keep)))
        .unwrap_or(today);
    let cutoff_ms = now
        .timezone()
        .from_local_datetime(&cutoff_day.and_time(NaiveTime::MIN))
        .earliest()
        .map(|dt| dt.timestamp_millis())
        // Midnight does not exist in this zone (DST edge): fall back to a
        // plain day subtraction from "now".
        .unwrap_or_else(|| (now.clone() - Duration::days(i64::from(days_to_keep))).timestamp_millis());

    let total_before = store.len()?;
    let mut deleted = 0usize;

    for key in store.keys()? {
        let Some(record) = store.get(&key)? else {
            continue;
        };
        match record_timestamp_ms(&key, &record) {
            Some(ms) if ms < cutoff_ms => {
                if store.remove(&key)? {
                    deleted += 1;
                }
            }
            Some(_) => {}
            None => {
                debug!(key = %key, "record timestamp unrecoverable, retaining");
            }
        }
    }

    let total_after = store.len()?;
    let report = SweepReport {
        total_before,
        total_after,
        deleted,
        retained: total_after,
        cutoff_date: day_key(cutoff_day),
        days_kept: days_to_keep,
        executed_at: now.to_rfc3339(),
    };
    info!(
        deleted = report.deleted,
        retained = report.retained,
        cutoff = %report.cutoff_date,
        "retention sweep complete"
    );
    Ok(report)
}
