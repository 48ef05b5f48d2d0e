// --- File: crates/hourgrid_calendar/src/classify.rs ---
//! Per-slot display classification.

use crate::grid::HourSlot;
use crate::selection::{Endpoint, Selection, SelectionMachine};
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Availability {
    /// Clickable
    Active,
    Unavailable,
    /// Bookable, but the calendar is read-only
    Inert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMark {
    /// Start of an open range
    Single,
    Start,
    Mid,
    End,
    Unselected,
    /// Cannot extend the open range to here
    Unavailable,
}

impl SelectionMark {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMark::Single => "single",
            SelectionMark::Start => "start",
            SelectionMark::Mid => "mid",
            SelectionMark::End => "end",
            SelectionMark::Unselected => "unselected",
            SelectionMark::Unavailable => "unavailable",
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(
            self,
            SelectionMark::Single | SelectionMark::Start | SelectionMark::Mid | SelectionMark::End
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourClass {
    pub availability: Availability,
    /// Non-working hour without a custom price
    pub non_working_hour: bool,
    /// `None` while nothing is selected
    pub mark: Option<SelectionMark>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotClass {
    /// No data for this hour
    Empty,
    InPast,
    Hour(HourClass),
}

impl SlotClass {
    /// Space separated class list, e.g. `active unselected` or `unavailable nonWorkingHour`.
    pub fn class_name(&self) -> String {
        match self {
            SlotClass::Empty => "empty".to_string(),
            SlotClass::InPast => "in-past".to_string(),
            SlotClass::Hour(hour) => {
                let mut names = Vec::with_capacity(3);
                match hour.availability {
                    Availability::Active => names.push("active"),
                    Availability::Unavailable => names.push("unavailable"),
                    Availability::Inert => {}
                }
                if hour.non_working_hour {
                    names.push("nonWorkingHour");
                }
                if let Some(mark) = hour.mark {
                    names.push(mark.as_str());
                }
                names.join(" ")
            }
        }
    }

    /// The single most telling class: a selection mark wins, then availability.
    pub fn primary(&self) -> &'static str {
        match self {
            SlotClass::Empty => "empty",
            SlotClass::InPast => "in-past",
            SlotClass::Hour(hour) => match (hour.mark, hour.availability) {
                (Some(mark), _) if mark.is_selected() => mark.as_str(),
                (_, Availability::Unavailable) => "unavailable",
                (Some(mark), _) => mark.as_str(),
                (None, Availability::Active) => "active",
                (None, _) => "unselected",
            },
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self,
            SlotClass::Hour(HourClass {
                availability: Availability::Active,
                ..
            })
        )
    }
}

/// Classifies `slot` against the current selection. `slots` is the whole week, needed to
/// decide whether the slot is reachable from an open start.
pub fn classify_slot(
    slots: &[HourSlot],
    slot: &HourSlot,
    machine: &SelectionMachine,
    now: &DateTime<Tz>,
    interactive: bool,
) -> SlotClass {
    let Some(record) = slot.record.as_ref() else {
        return SlotClass::Empty;
    };
    if slot.is_in_past(now) {
        return SlotClass::InPast;
    }

    let blocked = !record.is_bookable() || machine.is_unreachable(slots, slot.index);
    let availability = if blocked {
        Availability::Unavailable
    } else if interactive {
        Availability::Active
    } else {
        Availability::Inert
    };

    let at = slot.starts_at;
    let mark = match machine.selection() {
        Selection::Empty => None,
        Selection::Open { start } if at == start.at => Some(SelectionMark::Single),
        Selection::Open { start } if blocked || !Endpoint::of(slot).is_after(start) => {
            Some(SelectionMark::Unavailable)
        }
        Selection::Open { .. } => Some(SelectionMark::Unselected),
        Selection::Closed { start, .. } if at == start.at => Some(SelectionMark::Start),
        Selection::Closed { end, .. } if at == end.at => Some(SelectionMark::End),
        Selection::Closed { start, end } if start.at < at && at < end.at => {
            Some(SelectionMark::Mid)
        }
        Selection::Closed { .. } => Some(SelectionMark::Unselected),
    };

    SlotClass::Hour(HourClass {
        availability,
        non_working_hour: record.is_blocked_non_working_hour(),
        mark,
    })
}

/// Classifies every slot of the week.
pub fn classify_week(
    slots: &[HourSlot],
    machine: &SelectionMachine,
    now: &DateTime<Tz>,
    interactive: bool,
) -> Vec<SlotClass> {
    slots
        .iter()
        .map(|slot| classify_slot(slots, slot, machine, now, interactive))
        .collect()
}
