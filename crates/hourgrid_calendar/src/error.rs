// --- File: crates/hourgrid_calendar/src/error.rs ---
use hourgrid_common::{
    config_error, conflict, internal_error, unavailable, validation_error, HourgridError,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalendarError {
    #[error("Slot index {0} is outside the week grid")]
    SlotOutOfRange(usize),
    #[error("Cannot navigate to a week before the current one")]
    NavigationBlocked,
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
    #[error("Unknown time zone: {0}")]
    InvalidTimeZone(String),
    #[error("Failed to parse date: {0}")]
    InvalidDate(String),
    #[error("Local time {0} does not exist in the calendar time zone")]
    NonexistentLocalTime(String),
    #[error("Calendar is disabled")]
    Disabled,
}

impl From<CalendarError> for HourgridError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::SlotOutOfRange(_)
            | CalendarError::InvalidSelection(_)
            | CalendarError::InvalidDate(_) => validation_error(err),
            CalendarError::NavigationBlocked => conflict(err),
            CalendarError::InvalidTimeZone(_) => config_error(err),
            CalendarError::NonexistentLocalTime(_) => internal_error(err),
            CalendarError::Disabled => unavailable(err),
        }
    }
}
