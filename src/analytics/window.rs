//! Window resolution: period selector + reference date -> local time bounds.

use chrono::offset::LocalResult;
use chrono::{
    DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Utc,
};

/// Reporting period selector. Unrecognized strings are rejected at the
/// boundary instead of producing undefined bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    pub fn parse(s: &str) -> Option<Period> {
        match s {
            "day" => Some(Period::Day),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            _ => None,
        }
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}

/// `[00:00:00.000, 23:59:59.999]` of the given date.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    (date.and_time(NaiveTime::MIN), date.and_time(end_of_day()))
}

/// Most recent Sunday at midnight through exactly seven days later. The
/// end instant is the next Sunday's midnight; with the store's inclusive
/// `[start, end]` query that boundary instant itself still matches.
pub fn week_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let sunday = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
    let start = sunday.and_time(NaiveTime::MIN);
    (start, start + Duration::days(7))
}

/// First day of the calendar month at midnight through the last day at
/// 23:59:59.999.
pub fn month_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let first = date - Duration::days(i64::from(date.day0()));
    let last = first + Months::new(1) - Duration::days(1);
    (first.and_time(NaiveTime::MIN), last.and_time(end_of_day()))
}

pub fn resolve(period: Period, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    match period {
        Period::Day => day_bounds(date),
        Period::Week => week_bounds(date),
        Period::Month => month_bounds(date),
    }
}

/// Interpret a naive timestamp in the host's local calendar and convert to
/// a UTC instant. Ambiguous local times (fall-back transitions) take the
/// earlier instant; nonexistent ones (spring-forward gaps) the first valid
/// instant after the gap.
pub fn local_to_utc(ndt: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&ndt) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => {
            let shifted = ndt + Duration::hours(1);
            match Local.from_local_datetime(&shifted) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
                LocalResult::None => Utc.from_utc_datetime(&ndt),
            }
        }
    }
}

/// Convert a pair of local-naive bounds into UTC query instants.
pub fn window_utc(bounds: (NaiveDateTime, NaiveDateTime)) -> (DateTime<Utc>, DateTime<Utc>) {
    (local_to_utc(bounds.0), local_to_utc(bounds.1))
}

/// Today in the host's local calendar, the default reference date for all
/// dashboard queries.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
