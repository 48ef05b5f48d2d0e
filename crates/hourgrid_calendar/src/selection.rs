// --- File: crates/hourgrid_calendar/src/selection.rs ---
//! Click-to-select range state machine.
//!
//! The first click opens a range, a later click on a reachable slot closes it, and any click
//! after a closed range starts over. A candidate end is reachable only if every slot from the
//! start up to (but excluding) the candidate can be booked.

use crate::error::CalendarError;
use crate::grid::{format_timestamp, HourSlot, SLOTS_PER_WEEK};
use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// One end of a range: the grid index and the instant it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub index: usize,
    pub at: DateTime<Tz>,
}

impl Endpoint {
    pub fn of(slot: &HourSlot) -> Self {
        Self {
            index: slot.index,
            at: slot.starts_at,
        }
    }

    /// Later than `other` both as an instant and on the local clock. The repeated hour of an
    /// autumn DST change is later as an instant only, and would print as an empty range.
    pub fn is_after(&self, other: &Endpoint) -> bool {
        self.at > other.at && self.at.naive_local() > other.at.naive_local()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Open {
        start: Endpoint,
    },
    /// `end.is_after(start)` always holds
    Closed {
        start: Endpoint,
        end: Endpoint,
    },
}

impl Selection {
    pub fn start(&self) -> Option<&Endpoint> {
        match self {
            Selection::Empty => None,
            Selection::Open { start } | Selection::Closed { start, .. } => Some(start),
        }
    }

    pub fn end(&self) -> Option<&Endpoint> {
        match self {
            Selection::Closed { end, .. } => Some(end),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// The externally observable pair.
    pub fn timestamps(&self) -> (Option<DateTime<Tz>>, Option<DateTime<Tz>>) {
        (self.start().map(|e| e.at), self.end().map(|e| e.at))
    }

    pub fn indices(&self) -> (Option<usize>, Option<usize>) {
        (self.start().map(|e| e.index), self.end().map(|e| e.index))
    }

    /// ISO 8601 interval, either side empty when unset: `2019-03-01T01:00:00/2019-03-01T03:00:00`.
    pub fn range(&self) -> String {
        let side = |e: Option<&Endpoint>| e.map(|e| format_timestamp(&e.at)).unwrap_or_default();
        format!("{}/{}", side(self.start()), side(self.end()))
    }

    /// Rebuilds a selection from grid indices, e.g. when it round-trips through a client.
    pub fn from_indices(
        slots: &[HourSlot],
        start: Option<usize>,
        end: Option<usize>,
    ) -> Result<Self, CalendarError> {
        let endpoint = |index: usize| {
            slots
                .get(index)
                .map(Endpoint::of)
                .ok_or(CalendarError::SlotOutOfRange(index))
        };
        match (start, end) {
            (None, None) => Ok(Selection::Empty),
            (None, Some(_)) => Err(CalendarError::InvalidSelection(
                "end index given without a start index".to_string(),
            )),
            (Some(start), None) => Ok(Selection::Open {
                start: endpoint(start)?,
            }),
            (Some(start), Some(end)) => {
                let (start, end) = (endpoint(start)?, endpoint(end)?);
                if !end.is_after(&start) {
                    return Err(CalendarError::InvalidSelection(format!(
                        "end index {} is not after start index {}",
                        end.index, start.index
                    )));
                }
                Ok(Selection::Closed { start, end })
            }
        }
    }
}

/// Payload of the change notification.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeChange {
    #[cfg_attr(feature = "openapi", schema(example = "2019-03-01T01:00:00/2019-03-01T03:00:00"))]
    pub range: String,
}

impl From<&Selection> for RangeChange {
    fn from(selection: &Selection) -> Self {
        Self {
            range: selection.range(),
        }
    }
}

/// Selection plus the advisory hover position.
#[derive(Debug, Clone, Default)]
pub struct SelectionMachine {
    selection: Selection,
    hover: Option<usize>,
}

impl SelectionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selection: Selection) -> Self {
        Self {
            selection,
            hover: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Last index the pointer passed over.
    pub fn hovered(&self) -> Option<usize> {
        self.hover
    }

    pub fn hover(&mut self, index: usize) -> Result<(), CalendarError> {
        if index >= SLOTS_PER_WEEK {
            return Err(CalendarError::SlotOutOfRange(index));
        }
        self.hover = Some(index);
        Ok(())
    }

    /// Whether `index` cannot close the open range because something between the start and
    /// `index` is not bookable. Always false unless a range is open and `index` lies after it.
    ///
    /// Depends on both the candidate and the current grid, so it is evaluated fresh each time.
    pub fn is_unreachable(&self, slots: &[HourSlot], index: usize) -> bool {
        match self.selection {
            Selection::Open { start } if index > start.index => slots
                .get(start.index..index)
                .map_or(true, |between| between.iter().any(|slot| !slot.is_bookable())),
            _ => false,
        }
    }

    /// Applies a click on `index`. Returns the notification to emit, if the observable pair
    /// changed. Clicks on empty, past or unbookable slots are ignored.
    pub fn click(
        &mut self,
        slots: &[HourSlot],
        index: usize,
        now: &DateTime<Tz>,
    ) -> Result<Option<RangeChange>, CalendarError> {
        let slot = slots
            .get(index)
            .ok_or(CalendarError::SlotOutOfRange(index))?;
        if !slot.is_selectable(now) {
            debug!("Ignoring click on non-selectable slot {}", index);
            return Ok(None);
        }

        let clicked = Endpoint::of(slot);
        let next = match self.selection {
            Selection::Open { start }
                if !self.is_unreachable(slots, index) && clicked.is_after(&start) =>
            {
                Selection::Closed {
                    start,
                    end: clicked,
                }
            }
            // Empty, closed, unreachable, or not after the start: begin a new range here.
            _ => Selection::Open { start: clicked },
        };
        Ok(self.commit(next))
    }

    /// Clears the selection. Returns a notification only if something was selected.
    pub fn reset(&mut self) -> Option<RangeChange> {
        self.hover = None;
        self.commit(Selection::Empty)
    }

    /// Clears the selection without reporting it, for resets the owner already knows about.
    pub fn reset_silently(&mut self) {
        self.hover = None;
        self.selection = Selection::Empty;
    }

    fn commit(&mut self, next: Selection) -> Option<RangeChange> {
        let before = self.selection.timestamps();
        self.selection = next;
        if before == self.selection.timestamps() {
            return None;
        }
        let change = RangeChange::from(&self.selection);
        debug!("Selection changed to {}", change.range);
        Some(change)
    }
}
