// --- File: crates/hourgrid_calendar/src/lib.rs ---
pub mod availability;
pub mod calendar;
pub mod classify;
pub mod doc;
pub mod error;
pub mod grid;
pub mod handlers;
#[cfg(test)]
mod logic_proptest;
pub mod routes;
pub mod selection;
#[cfg(test)]
mod selection_test;
#[cfg(test)]
mod test_support;
pub mod view;

pub use availability::{InMemoryAvailability, WorkingHoursAvailability};
pub use calendar::{CalendarSettings, Direction, RangeCallback, WeekCalendar};
pub use classify::{classify_slot, classify_week, Availability, HourClass, SelectionMark, SlotClass};
pub use error::CalendarError;
pub use grid::{build_week, HourSlot, SLOTS_PER_WEEK};
pub use selection::{Endpoint, RangeChange, Selection, SelectionMachine};
pub use view::{SlotContent, SlotView, WeekView};
