// --- File: crates/hourgrid_calendar/src/test_support.rs ---
//! Fixtures shared by the unit tests.

use crate::availability::InMemoryAvailability;
use crate::calendar::{CalendarSettings, WeekCalendar};
use crate::grid::{format_timestamp, local_midnight, week_start_for};
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use hourgrid_common::HourRecord;
use rust_decimal::Decimal;
use std::sync::Arc;

pub const TZ: Tz = Tz::Europe__Zurich;

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Tz> {
    TZ.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Sunday starting the week around 15 May of next year: always ahead of the clock, and clear
/// of any DST change, so `idx(day, hour)` really is `hour` o'clock on `day`.
pub fn anchor() -> DateTime<Tz> {
    let year = Utc::now().with_timezone(&TZ).year() + 1;
    let mid_may = NaiveDate::from_ymd_opt(year, 5, 15).unwrap();
    week_start_for(&local_midnight(TZ, mid_may).unwrap(), Weekday::Sun).unwrap()
}

/// 08:00 four days before the anchor week, so nothing in it is in the past.
pub fn early_now() -> DateTime<Tz> {
    anchor() - Duration::days(4) + Duration::hours(8)
}

/// Start of `hour` on day `day` (0 = Sunday) of the anchor week.
pub fn slot_at(day: usize, hour: usize) -> DateTime<Tz> {
    anchor() + Duration::hours(idx(day, hour) as i64)
}

/// Range timestamp of [`slot_at`].
pub fn stamp(day: usize, hour: usize) -> String {
    format_timestamp(&slot_at(day, hour))
}

/// `YYYY-MM-DD` of the anchor week's Sunday plus `days`.
pub fn week_date(days: i64) -> String {
    (anchor() + Duration::days(days)).format("%Y-%m-%d").to_string()
}

/// Grid index of `hour` on day `day` (0 = Sunday) of the anchor week.
pub fn idx(day: usize, hour: usize) -> usize {
    day * 24 + hour
}

pub fn unavailable() -> HourRecord {
    HourRecord {
        unavailable: true,
        ..HourRecord::default()
    }
}

/// Monday 09:00-17:00 priced at 100, every other hour of the prefetch window unavailable.
pub fn monday_office_hours(week_start: DateTime<Tz>) -> InMemoryAvailability {
    let mut source = InMemoryAvailability::new();
    for offset in 0..27 * 7 {
        let local = (week_start + Duration::hours(offset)).naive_local();
        let record = if local.weekday() == Weekday::Mon && (9..17).contains(&local.hour()) {
            HourRecord::priced(Decimal::from(100))
        } else {
            unavailable()
        };
        source.insert(local, record);
    }
    source
}

/// Every hour of the prefetch window priced at 50.
pub fn all_open(week_start: DateTime<Tz>) -> InMemoryAvailability {
    let mut source = InMemoryAvailability::new();
    for offset in 0..27 * 7 {
        let local = (week_start + Duration::hours(offset)).naive_local();
        source.insert(local, HourRecord::priced(Decimal::from(50)));
    }
    source
}

pub fn settings() -> CalendarSettings {
    CalendarSettings {
        time_zone: TZ,
        ..CalendarSettings::default()
    }
}

pub fn calendar(source: InMemoryAvailability) -> WeekCalendar {
    WeekCalendar::new(settings(), Arc::new(source), anchor())
}
