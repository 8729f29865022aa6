//! Tests for calendar resolution: canonical day keys, lenient list parsing,
//! and holiday/excluded classification.

use chrono::{NaiveDate, NaiveDateTime};

use autosched_engine::calendar::{day_key, parse_day_key, resolve, WeekdayTag};

fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{date}T{time}"), "%Y-%m-%dT%H:%M:%S")
        .expect("valid test datetime")
}

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// parse_day_key
// ---------------------------------------------------------------------------

#[test]
fn parses_plain_date() {
    assert_eq!(
        parse_day_key("2025-12-25"),
        NaiveDate::from_ymd_opt(2025, 12, 25)
    );
}

#[test]
fn parses_local_datetime() {
    assert_eq!(
        parse_day_key("2025-12-25T08:30:00"),
        NaiveDate::from_ymd_opt(2025, 12, 25)
    );
}

#[test]
fn parses_rfc3339_in_its_stated_offset() {
    // 23:30 at +02:00 is still Dec 25 locally, even though it is Dec 25
    // 21:30 UTC.
    assert_eq!(
        parse_day_key("2025-12-25T23:30:00+02:00"),
        NaiveDate::from_ymd_opt(2025, 12, 25)
    );
}

#[test]
fn parses_epoch_millis() {
    // 2025-12-25T00:00:00Z
    assert_eq!(
        parse_day_key("1766620800000"),
        NaiveDate::from_ymd_opt(2025, 12, 25)
    );
}

#[test]
fn malformed_inputs_yield_none() {
    for raw in ["", "  ", "christmas", "25/12/2025", "2025-13-40", "12:00"] {
        assert_eq!(parse_day_key(raw), None, "{raw:?} should not parse");
    }
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(
        parse_day_key("  2025-12-25  "),
        NaiveDate::from_ymd_opt(2025, 12, 25)
    );
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

#[test]
fn classifies_a_holiday() {
    let ctx = resolve(
        at("2025-12-25", "12:00:00"),
        &strings(&["2025-12-25", "2026-01-01"]),
        &[],
    );
    assert_eq!(ctx.today_key, "2025-12-25");
    assert!(ctx.is_holiday_today);
    assert!(!ctx.is_excluded_today);
    assert_eq!(ctx.current_week_day, WeekdayTag::Thu);
}

#[test]
fn classifies_an_excluded_day() {
    let ctx = resolve(at("2025-12-22", "06:00:00"), &[], &strings(&["2025-12-22"]));
    assert!(ctx.is_excluded_today);
    assert!(!ctx.is_holiday_today);
    assert_eq!(ctx.current_week_day, WeekdayTag::Mon);
}

#[test]
fn malformed_list_entries_never_match_and_never_panic() {
    let ctx = resolve(
        at("2025-12-25", "12:00:00"),
        &strings(&["not a date", "", "9999-99-99"]),
        &strings(&["garbage"]),
    );
    assert!(!ctx.is_holiday_today);
    assert!(!ctx.is_excluded_today);
}

#[test]
fn datetime_valued_holiday_matches_its_day() {
    let ctx = resolve(
        at("2025-12-25", "12:00:00"),
        &strings(&["2025-12-25T00:00:00"]),
        &[],
    );
    assert!(ctx.is_holiday_today);
}

#[test]
fn day_key_is_zero_padded() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 5).expect("valid date");
    assert_eq!(day_key(date), "2026-03-05");
}

// ---------------------------------------------------------------------------
// WeekdayTag
// ---------------------------------------------------------------------------

#[test]
fn prev_wraps_the_week() {
    assert_eq!(WeekdayTag::Mon.prev(), WeekdayTag::Sun);
    assert_eq!(WeekdayTag::Sun.prev(), WeekdayTag::Sat);
    assert_eq!(WeekdayTag::Thu.prev(), WeekdayTag::Wed);
}

#[test]
fn tags_serialize_lowercase() {
    assert_eq!(
        serde_json::to_string(&WeekdayTag::Wed).expect("serializes"),
        "\"wed\""
    );
}
