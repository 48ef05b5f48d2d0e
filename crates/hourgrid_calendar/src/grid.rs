// --- File: crates/hourgrid_calendar/src/grid.rs ---
//! Week grid assembly.
//!
//! A week is 168 one-hour slots starting at the week anchor. Slot `i` starts exactly `i` hours
//! after the anchor; the rendered grid flows column-wise, so `i / 24` is the day column and
//! `i % 24` the row.

use crate::error::CalendarError;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Weekday};
use chrono_tz::Tz;
use hourgrid_common::{hour_key, AvailabilitySource, AvailabilityWindow, HourRecord, HOURS_PER_WEEK};
use tracing::debug;

pub const DAYS_PER_WEEK: usize = 7;
pub const HOURS_PER_DAY: usize = 24;
pub const SLOTS_PER_WEEK: usize = DAYS_PER_WEEK * HOURS_PER_DAY;

/// Timestamp format used in emitted ranges, e.g. `2019-03-01T01:00:00`.
pub const RANGE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One hour cell of the week grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HourSlot {
    pub index: usize,
    pub starts_at: DateTime<Tz>,
    /// `None` when the source had nothing for this hour
    pub record: Option<HourRecord>,
}

impl HourSlot {
    pub fn day(&self) -> usize {
        self.index / HOURS_PER_DAY
    }

    pub fn hour_of_day(&self) -> usize {
        self.index % HOURS_PER_DAY
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_none()
    }

    pub fn is_in_past(&self, now: &DateTime<Tz>) -> bool {
        self.starts_at < *now
    }

    /// Has data and that data allows booking. Ignores the clock.
    pub fn is_bookable(&self) -> bool {
        self.record.as_ref().is_some_and(HourRecord::is_bookable)
    }

    /// Can be clicked to start or end a range right now.
    pub fn is_selectable(&self, now: &DateTime<Tz>) -> bool {
        !self.is_in_past(now) && self.is_bookable()
    }

    pub fn hour_key(&self) -> String {
        hour_key(&self.starts_at)
    }
}

/// Builds the 168 slots of the week starting at `week_start`.
///
/// The source is asked for `[week_start, week_start + prefetch)`, where the prefetch length is
/// the source's own policy but never less than a week.
pub fn build_week<S>(week_start: DateTime<Tz>, source: &S) -> Vec<HourSlot>
where
    S: AvailabilitySource + ?Sized,
{
    let prefetch = source.prefetch_hours().max(HOURS_PER_WEEK);
    let window = AvailabilityWindow::from_start(week_start, prefetch);
    let records = source.get_availability(&window);

    debug!(
        "Building week {} - {} from {} availability records",
        window.start_key(),
        window.end_key(),
        records.len()
    );

    (0..SLOTS_PER_WEEK)
        .map(|index| {
            let starts_at = week_start + Duration::hours(index as i64);
            // Looked up by local hour; both occurrences of a repeated DST hour share a record.
            let record = records.get(&hour_key(&starts_at)).cloned();
            HourSlot {
                index,
                starts_at,
                record,
            }
        })
        .collect()
}

/// Local midnight of `date` in `tz`.
pub fn local_midnight(tz: Tz, date: NaiveDate) -> Result<DateTime<Tz>, CalendarError> {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .ok_or_else(|| CalendarError::NonexistentLocalTime(midnight.to_string()))
}

/// Start of the week containing `at`, in `at`'s time zone.
pub fn week_start_for(at: &DateTime<Tz>, first_day: Weekday) -> Result<DateTime<Tz>, CalendarError> {
    let date = at.date_naive();
    let offset = (7 + date.weekday().num_days_from_monday() - first_day.num_days_from_monday()) % 7;
    local_midnight(at.timezone(), date - Duration::days(offset as i64))
}

/// Parses `YYYY-MM-DD` and snaps it to the start of its week.
pub fn parse_week_start(
    date: &str,
    tz: Tz,
    first_day: Weekday,
) -> Result<DateTime<Tz>, CalendarError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| CalendarError::InvalidDate(format!("{}: {}", date, e)))?;
    week_start_for(&local_midnight(tz, date)?, first_day)
}

pub fn parse_time_zone(name: &str) -> Result<Tz, CalendarError> {
    name.parse::<Tz>()
        .map_err(|_| CalendarError::InvalidTimeZone(name.to_string()))
}

/// Formats a slot timestamp the way ranges carry it.
pub fn format_timestamp(at: &DateTime<Tz>) -> String {
    at.format(RANGE_TIMESTAMP_FORMAT).to_string()
}
