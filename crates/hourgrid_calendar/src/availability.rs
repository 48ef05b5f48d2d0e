// --- File: crates/hourgrid_calendar/src/availability.rs ---
//! Availability sources shipped with the calendar.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Weekday};
use hourgrid_common::{
    hour_key, naive_hour_key, AvailabilitySource, AvailabilityWindow, HourRecord, HOURS_PER_WEEK,
};
use hourgrid_config::{CalendarConfig, IntervalConfig};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Derives availability from configured working hours.
///
/// Hours on working days inside `[work_start_hour, work_end_hour)` are priced at the default
/// price. Everything else is a non-working hour, unless a custom price was set for it.
/// Configured booked and unavailable intervals flag the hours they cover.
#[derive(Debug, Clone)]
pub struct WorkingHoursAvailability {
    work_start_hour: u32,
    work_end_hour: u32,
    working_days: Vec<Weekday>,
    default_price: Option<Decimal>,
    custom_prices: HashMap<String, Decimal>,
    booked: Vec<IntervalConfig>,
    unavailable: Vec<IntervalConfig>,
    prefetch_hours: i64,
}

impl WorkingHoursAvailability {
    pub fn from_config(config: &CalendarConfig) -> Self {
        Self {
            work_start_hour: config.work_start_hour,
            work_end_hour: config.work_end_hour,
            working_days: config.working_days.clone(),
            default_price: config.default_price,
            custom_prices: config
                .custom_prices
                .iter()
                .map(|custom| (naive_hour_key(&custom.hour), custom.price))
                .collect(),
            booked: config.booked.clone(),
            unavailable: config.unavailable.clone(),
            prefetch_hours: config.prefetch_hours,
        }
    }

    fn is_working_hour(&self, local: &NaiveDateTime) -> bool {
        self.working_days.contains(&local.weekday())
            && (self.work_start_hour..self.work_end_hour).contains(&local.hour())
    }

    /// Record for the local hour starting at `local`.
    pub fn record_for(&self, local: &NaiveDateTime) -> HourRecord {
        let custom = self.custom_prices.get(&naive_hour_key(local)).copied();
        HourRecord {
            price: custom.or(self.default_price),
            booked: self.booked.iter().any(|interval| interval.contains(local)),
            unavailable: self.unavailable.iter().any(|interval| interval.contains(local)),
            custom_price: custom.is_some(),
            non_working_hour: !self.is_working_hour(local),
        }
    }
}

impl AvailabilitySource for WorkingHoursAvailability {
    fn get_availability(&self, window: &AvailabilityWindow) -> HashMap<String, HourRecord> {
        let mut records = HashMap::new();
        let mut at = window.start;
        while at < window.end {
            let local = at.naive_local();
            let hour_start = local
                .with_minute(0)
                .and_then(|t| t.with_second(0))
                .unwrap_or(local);
            records
                .entry(hour_key(&at))
                .or_insert_with(|| self.record_for(&hour_start));
            at += Duration::hours(1);
        }
        records
    }

    fn prefetch_hours(&self) -> i64 {
        self.prefetch_hours
    }
}

/// A fixed table of records keyed by local hour.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAvailability {
    records: HashMap<String, HourRecord>,
    prefetch_hours: Option<i64>,
}

impl InMemoryAvailability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, hour: NaiveDateTime, record: HourRecord) {
        self.records.insert(naive_hour_key(&hour), record);
    }

    pub fn with(mut self, hour: NaiveDateTime, record: HourRecord) -> Self {
        self.insert(hour, record);
        self
    }

    pub fn with_prefetch_hours(mut self, hours: i64) -> Self {
        self.prefetch_hours = Some(hours);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AvailabilitySource for InMemoryAvailability {
    fn get_availability(&self, window: &AvailabilityWindow) -> HashMap<String, HourRecord> {
        // Keys share one fixed-width format, so they order like the hours they name.
        let (start, end) = (window.start_key(), window.end_key());
        self.records
            .iter()
            .filter(|(key, _)| start.as_str() <= key.as_str() && key.as_str() < end.as_str())
            .map(|(key, record)| (key.clone(), record.clone()))
            .collect()
    }

    fn prefetch_hours(&self) -> i64 {
        self.prefetch_hours.unwrap_or(HOURS_PER_WEEK)
    }
}
