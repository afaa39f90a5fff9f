//! Window resolver tests: day/week/month bounds and local-time conversion.

use chrono::{Datelike, Duration, Local, NaiveDate, Timelike, Weekday};
use dinehub::analytics::window::{self, Period};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn day_bounds_cover_the_full_day() {
    let (start, end) = window::day_bounds(date(2026, 8, 5));
    assert_eq!(start.date(), date(2026, 8, 5));
    assert_eq!((start.hour(), start.minute(), start.second()), (0, 0, 0));
    assert_eq!(start.and_utc().timestamp_subsec_millis(), 0);
    assert_eq!(end.date(), date(2026, 8, 5));
    assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
    assert_eq!(end.and_utc().timestamp_subsec_millis(), 999);
}

#[test]
fn week_bounds_roll_back_to_sunday() {
    // 2026-08-05 is a Wednesday; its week starts Sunday 2026-08-02.
    let (start, end) = window::week_bounds(date(2026, 8, 5));
    assert_eq!(start.date(), date(2026, 8, 2));
    assert_eq!(start.date().weekday(), Weekday::Sun);
    assert_eq!((start.hour(), start.minute(), start.second()), (0, 0, 0));
    assert_eq!(end, start + Duration::days(7));
    assert_eq!(end.date(), date(2026, 8, 9));
}

#[test]
fn week_bounds_on_a_sunday_start_that_day() {
    let (start, _) = window::week_bounds(date(2026, 8, 2));
    assert_eq!(start.date(), date(2026, 8, 2));
}

#[test]
fn month_bounds_cover_the_calendar_month() {
    let (start, end) = window::month_bounds(date(2026, 8, 15));
    assert_eq!(start.date(), date(2026, 8, 1));
    assert_eq!(end.date(), date(2026, 8, 31));
    assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
}

#[test]
fn month_bounds_handle_leap_february() {
    let (start, end) = window::month_bounds(date(2024, 2, 10));
    assert_eq!(start.date(), date(2024, 2, 1));
    assert_eq!(end.date(), date(2024, 2, 29));
}

#[test]
fn month_bounds_handle_december_rollover() {
    let (start, end) = window::month_bounds(date(2025, 12, 15));
    assert_eq!(start.date(), date(2025, 12, 1));
    assert_eq!(end.date(), date(2025, 12, 31));
}

#[test]
fn resolve_dispatches_on_period() {
    let d = date(2026, 8, 5);
    assert_eq!(window::resolve(Period::Day, d), window::day_bounds(d));
    assert_eq!(window::resolve(Period::Week, d), window::week_bounds(d));
    assert_eq!(window::resolve(Period::Month, d), window::month_bounds(d));
}

#[test]
fn period_parse_accepts_only_known_selectors() {
    assert_eq!(Period::parse("day"), Some(Period::Day));
    assert_eq!(Period::parse("week"), Some(Period::Week));
    assert_eq!(Period::parse("month"), Some(Period::Month));
    assert_eq!(Period::parse("year"), None);
    assert_eq!(Period::parse(""), None);
    assert_eq!(Period::parse("Day"), None);
}

#[test]
fn local_to_utc_round_trips_through_local_time() {
    // Noon is never inside a DST transition.
    let noon = date(2026, 7, 15).and_hms_opt(12, 0, 0).unwrap();
    let instant = window::local_to_utc(noon);
    assert_eq!(instant.with_timezone(&Local).naive_local(), noon);
}

#[test]
fn window_utc_preserves_ordering() {
    let (start, end) = window::window_utc(window::day_bounds(date(2026, 8, 5)));
    assert!(start < end);
}
