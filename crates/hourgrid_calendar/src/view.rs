// --- File: crates/hourgrid_calendar/src/view.rs ---
//! Serializable snapshot of a rendered week.

use crate::calendar::WeekCalendar;
use crate::classify::{classify_slot, SlotClass};
use crate::grid::{HourSlot, DAYS_PER_WEEK, HOURS_PER_DAY};
use crate::selection::SelectionMachine;
use chrono::{DateTime, Datelike, Duration, NaiveTime, Timelike};
use chrono_tz::Tz;
use hourgrid_common::HourRecord;
use rust_decimal::Decimal;
use serde::Serialize;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayHeader {
    #[cfg_attr(feature = "openapi", schema(example = "Mon"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = 12))]
    pub number: u32,
}

/// What a bookable-looking cell shows. Currency formatting is left to the client.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SlotContent {
    Blank,
    Booked,
    Unavailable,
    Price {
        #[cfg_attr(feature = "openapi", schema(value_type = String, example = "100"))]
        amount: Decimal,
        /// Set explicitly for this hour, highlighted in the grid
        custom: bool,
    },
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub index: usize,
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-12T09:00:00"))]
    pub hour_key: String,
    #[cfg_attr(feature = "openapi", schema(example = "active unselected"))]
    pub class_name: String,
    pub primary: String,
    /// Accepts clicks
    pub active: bool,
    pub content: Option<SlotContent>,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekView {
    #[cfg_attr(feature = "openapi", schema(example = "Mar - Apr 2019"))]
    pub title: String,
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-11"))]
    pub week_start: String,
    pub can_go_back: bool,
    pub currency: String,
    pub day_headers: Vec<DayHeader>,
    pub time_labels: Vec<String>,
    /// Hour row to scroll to when the grid first shows
    pub initial_scroll_hour: u32,
    pub range: String,
    pub start_index: Option<usize>,
    pub end_index: Option<usize>,
    pub slots: Vec<SlotView>,
}

/// `May 2025`, or `Apr - May 2025` when the week runs into the next month.
pub fn week_title(week_start: &DateTime<Tz>) -> String {
    let first = week_start.date_naive();
    let last = first + Duration::days(DAYS_PER_WEEK as i64 - 1);
    let mut title = first.format("%b ").to_string();
    if last.month() != first.month() {
        title.push_str(&last.format("- %b ").to_string());
    }
    title.push_str(&first.format("%Y").to_string());
    title
}

pub fn day_headers(week_start: &DateTime<Tz>) -> Vec<DayHeader> {
    let first = week_start.date_naive();
    (0..DAYS_PER_WEEK as i64)
        .map(|k| {
            let date = first + Duration::days(k);
            DayHeader {
                name: date.format("%a").to_string(),
                number: date.day(),
            }
        })
        .collect()
}

/// `12am`, `1am`, ... `11pm`.
pub fn time_labels() -> Vec<String> {
    (0..HOURS_PER_DAY as u32)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .map(|time| time.format("%-I%P").to_string())
        .collect()
}

pub fn slot_content(record: &HourRecord, show_booked: bool) -> SlotContent {
    let price = |custom| match record.price {
        Some(amount) => SlotContent::Price { amount, custom },
        None => SlotContent::Blank,
    };
    if record.booked && show_booked {
        SlotContent::Booked
    } else if record.unavailable {
        SlotContent::Unavailable
    } else if record.custom_price {
        price(true)
    } else if record.non_working_hour {
        SlotContent::Blank
    } else {
        price(false)
    }
}

fn slot_view(
    slots: &[HourSlot],
    slot: &HourSlot,
    machine: &SelectionMachine,
    now: &DateTime<Tz>,
    interactive: bool,
    show_booked: bool,
) -> SlotView {
    let class = classify_slot(slots, slot, machine, now, interactive);
    let content = match (&class, &slot.record) {
        (SlotClass::Hour(_), Some(record)) => Some(slot_content(record, show_booked)),
        _ => None,
    };
    SlotView {
        index: slot.index,
        hour_key: slot.hour_key(),
        class_name: class.class_name(),
        primary: class.primary().to_string(),
        active: class.is_active(),
        content,
    }
}

impl WeekCalendar {
    /// Renders the week as of `now`. Deterministic for fixed inputs.
    pub fn render(&self, now: &DateTime<Tz>) -> WeekView {
        let settings = self.settings();
        let week_start = self.week_start();
        let slots = self.slots();
        let machine = self.machine();
        let (start_index, end_index) = self.selection().indices();

        WeekView {
            title: week_title(&week_start),
            week_start: week_start.format("%Y-%m-%d").to_string(),
            can_go_back: self.can_go_back(now),
            currency: settings.currency.clone(),
            day_headers: day_headers(&week_start),
            time_labels: time_labels(),
            initial_scroll_hour: now.with_timezone(&settings.time_zone).hour(),
            range: self.selection().range(),
            start_index,
            end_index,
            slots: slots
                .iter()
                .map(|slot| {
                    slot_view(
                        &slots,
                        slot,
                        machine,
                        now,
                        settings.interactive,
                        settings.show_booked,
                    )
                })
                .collect(),
        }
    }
}
