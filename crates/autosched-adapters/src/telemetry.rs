//! Telemetry frame formatting.
//!
//! Shapes an observability record for the telemetry sink:
//!
//! ```json
//! { "<deviceName>": [ { "ts": <epochMs>, "values": { "automation_log": {
//!       "action", "shouldActivate", "shouldShutdown", "reason", "schedule"?
//! } } } ] }
//! ```
//!
//! Device identity and timestamps are carried by the frame envelope, so the
//! nested `automation_log` object deliberately excludes the record's
//! `device`/`deviceId`/`timestamp` fields. Validation failures are logged
//! and yield `None` -- this adapter never panics across the boundary.

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use tracing::warn;

use autosched_log::ObservabilityRecord;

/// Format one record as a per-device telemetry frame.
///
/// A record without a `timestampMs` gets `now` as `ts` (callers pass `None`
/// to use the call-time wall clock). A record with a missing or empty device
/// name cannot be keyed and is a hard failure for this adapter: a
/// descriptive log plus `None`.
pub fn format_telemetry(record: &ObservabilityRecord, now: Option<DateTime<Utc>>) -> Option<Value> {
    let data = &record.log_data;
    let device_name = data.device.trim();
    if device_name.is_empty() {
        warn!(
            log_key = %record.log_key,
            "record has no device name, cannot emit telemetry frame"
        );
        return None;
    }

    let ts = data
        .timestamp_ms
        .unwrap_or_else(|| now.unwrap_or_else(Utc::now).timestamp_millis());

    let mut automation_log = Map::new();
    automation_log.insert("action".to_string(), json!(data.action));
    automation_log.insert("shouldActivate".to_string(), json!(data.should_activate));
    automation_log.insert("shouldShutdown".to_string(), json!(data.should_shutdown));
    automation_log.insert("reason".to_string(), json!(data.reason));
    if let Some(schedule) = &data.schedule {
        automation_log.insert("schedule".to_string(), json!(schedule));
    }

    let point = json!({
        "ts": ts,
        "values": { "automation_log": Value::Object(automation_log) },
    });

    let mut frame = Map::new();
    frame.insert(device_name.to_string(), Value::Array(vec![point]));
    Some(Value::Object(frame))
}
