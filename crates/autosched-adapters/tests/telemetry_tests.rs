//! Tests for the telemetry formatter: frame shape, field exclusion, the
//! wall-clock fallback, and the recorder → formatter round trip.

use chrono::{TimeZone, Utc};

use autosched_adapters::format_telemetry;
use autosched_engine::{
    CalendarContext, Decision, Device, Evaluation, Reason, ScheduleEntry, WeekdayTag,
};
use autosched_log::build_record;
use autosched_log::record::{LogContext, LogData, ObservabilityRecord};

fn device() -> Device {
    Device {
        name: "Lobby Vent".to_string(),
        id: "dev-12".to_string(),
        slave_id: 2,
        channel_id: 5,
    }
}

fn evaluation() -> Evaluation {
    Evaluation {
        decision: Decision {
            should_activate: true,
            should_shutdown: false,
            reason: Reason::Holiday,
        },
        winning_schedule: Some(ScheduleEntry {
            start_hour: "10:00".to_string(),
            end_hour: "18:00".to_string(),
            days_week: Default::default(),
            holiday: true,
            retain: true,
        }),
        context: CalendarContext {
            today_key: "2025-12-25".to_string(),
            is_holiday_today: true,
            is_excluded_today: false,
            current_week_day: WeekdayTag::Thu,
        },
        total_schedules: 1,
    }
}

#[test]
fn frame_is_keyed_by_device_name_with_record_timestamp() {
    let now = Utc.with_ymd_and_hms(2025, 12, 25, 12, 0, 0).single().expect("valid instant");
    let record = build_record(&device(), &evaluation(), now);

    let frame = format_telemetry(&record, None).expect("complete record formats");
    let series = &frame["Lobby Vent"];
    assert!(series.is_array());
    assert_eq!(series[0]["ts"], 1766664000000i64);

    let log = &series[0]["values"]["automation_log"];
    assert_eq!(log["action"], "ON");
    assert_eq!(log["shouldActivate"], true);
    assert_eq!(log["shouldShutdown"], false);
    assert_eq!(log["reason"], "holiday");
    assert_eq!(log["schedule"]["startHour"], "10:00");
}

#[test]
fn nested_object_excludes_identity_and_timestamp_fields() {
    let now = Utc.with_ymd_and_hms(2025, 12, 25, 12, 0, 0).single().expect("valid instant");
    let record = build_record(&device(), &evaluation(), now);

    let frame = format_telemetry(&record, None).expect("complete record formats");
    let log = &frame["Lobby Vent"][0]["values"]["automation_log"];
    for excluded in ["device", "deviceId", "timestamp", "timestampMs"] {
        assert!(
            log.get(excluded).is_none(),
            "{excluded} must not leak into the nested object"
        );
    }
}

#[test]
fn schedule_is_omitted_when_no_entry_won() {
    let now = Utc.with_ymd_and_hms(2025, 12, 25, 12, 0, 0).single().expect("valid instant");
    let mut evaluation = evaluation();
    evaluation.winning_schedule = None;
    let record = build_record(&device(), &evaluation, now);

    let frame = format_telemetry(&record, None).expect("complete record formats");
    let log = &frame["Lobby Vent"][0]["values"]["automation_log"];
    assert!(log.get("schedule").is_none());
}

#[test]
fn missing_timestamp_ms_falls_back_to_supplied_instant() {
    let now = Utc.with_ymd_and_hms(2025, 12, 25, 12, 0, 0).single().expect("valid instant");
    let mut record = build_record(&device(), &evaluation(), now);
    record.log_data.timestamp_ms = None;

    let fallback = Utc.with_ymd_and_hms(2025, 12, 26, 9, 30, 0).single().expect("valid instant");
    let frame = format_telemetry(&record, Some(fallback)).expect("record still formats");

    assert_eq!(frame["Lobby Vent"][0]["ts"], fallback.timestamp_millis());
}

#[test]
fn missing_device_name_is_a_hard_failure() {
    let record = ObservabilityRecord {
        log_key: "automation_log__1766664000000".to_string(),
        log_data: LogData {
            device: "   ".to_string(),
            device_id: "dev-12".to_string(),
            action: "ON".to_string(),
            should_activate: true,
            should_shutdown: false,
            reason: Reason::Holiday,
            schedule: None,
            context: Some(LogContext {
                is_holiday_today: true,
                current_week_day: WeekdayTag::Thu,
                holiday_policy: "exclusive".to_string(),
                total_schedules: 1,
            }),
            timestamp: None,
            timestamp_ms: Some(1),
        },
    };
    assert!(format_telemetry(&record, None).is_none());
}

#[test]
fn recorder_to_formatter_round_trip_preserves_the_decision() {
    let now = Utc.with_ymd_and_hms(2025, 12, 25, 12, 0, 0).single().expect("valid instant");
    let record = build_record(&device(), &evaluation(), now);
    let frame = format_telemetry(&record, None).expect("complete record formats");
    let log = &frame["Lobby Vent"][0]["values"]["automation_log"];

    assert_eq!(log["action"], record.log_data.action.as_str());
    assert_eq!(log["shouldActivate"], record.log_data.should_activate);
    assert_eq!(log["shouldShutdown"], record.log_data.should_shutdown);
    assert_eq!(
        log["reason"],
        serde_json::to_value(record.log_data.reason).expect("reason serializes")
    );
}
