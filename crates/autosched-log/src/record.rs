//! Immutable observability records.
//!
//! Every tick produces one structured record per device under a fresh key --
//! never an update. The key embeds device identity and the tick instant:
//! `automation_log_<DeviceNameNoSpaces>_<epochMs>`. The timestamp in the key
//! is a debug convenience; the authoritative timestamps live in the record
//! body (`timestamp` as RFC 3339, `timestampMs` as epoch milliseconds).

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use autosched_engine::{Device, Evaluation, Reason, ScheduleEntry, WeekdayTag};

/// Prefix shared by every log key.
pub const LOG_KEY_PREFIX: &str = "automation_log_";

/// The fixed filtering policy recorded with every decision.
pub const HOLIDAY_POLICY: &str = "exclusive";

/// Calendar snapshot recorded alongside the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogContext {
    pub is_holiday_today: bool,
    pub current_week_day: WeekdayTag,
    /// Always [`HOLIDAY_POLICY`]; recorded so downstream consumers need no
    /// out-of-band knowledge of the filtering rule.
    pub holiday_policy: String,
    /// Count of configured (not just applicable) schedule entries.
    pub total_schedules: usize,
}

/// The record body. Readers tolerate unknown and missing fields: every
/// field defaults on the way in, so an older or partial stored record still
/// deserializes even though this crate always writes the full shape. A
/// single unreadable legacy record must never make a whole store
/// unloadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogData {
    /// Device display name.
    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub device_id: String,
    /// `"ON"` iff the decision activates, `"OFF"` otherwise.
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub should_activate: bool,
    #[serde(default)]
    pub should_shutdown: bool,
    #[serde(default)]
    pub reason: Reason,
    /// Snapshot of the winning schedule entry, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<LogContext>,
    /// RFC 3339 timestamp of the decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Epoch-milliseconds timestamp of the decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<i64>,
}

/// One write-once decision record, keyed for the log store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservabilityRecord {
    pub log_key: String,
    pub log_data: LogData,
}

/// Build the stable log key for a device at a tick instant. Whitespace in
/// the device name is stripped so the key stays a single token.
pub fn log_key(device_name: &str, epoch_ms: i64) -> String {
    let compact: String = device_name.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{LOG_KEY_PREFIX}{compact}_{epoch_ms}")
}

/// Build the observability record for one evaluated tick.
pub fn build_record<Tz: TimeZone>(
    device: &Device,
    evaluation: &Evaluation,
    now: DateTime<Tz>,
) -> ObservabilityRecord
where
    Tz::Offset: std::fmt::Display,
{
    let epoch_ms = now.timestamp_millis();
    let decision = evaluation.decision;
    let action = if decision.should_activate { "ON" } else { "OFF" };

    ObservabilityRecord {
        log_key: log_key(&device.name, epoch_ms),
        log_data: LogData {
            device: device.name.clone(),
            device_id: device.id.clone(),
            action: action.to_string(),
            should_activate: decision.should_activate,
            should_shutdown: decision.should_shutdown,
            reason: decision.reason,
            schedule: evaluation.winning_schedule.clone(),
            context: Some(LogContext {
                is_holiday_today: evaluation.context.is_holiday_today,
                current_week_day: evaluation.context.current_week_day,
                holiday_policy: HOLIDAY_POLICY.to_string(),
                total_schedules: evaluation.total_schedules,
            }),
            timestamp: Some(now.to_rfc3339()),
            timestamp_ms: Some(epoch_ms),
        },
    }
}
