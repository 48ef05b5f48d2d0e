// --- File: crates/hourgrid_calendar/src/calendar.rs ---
//! The week calendar controller: anchor week, selection, navigation and change notification.

use crate::classify::{classify_week, SlotClass};
use crate::error::CalendarError;
use crate::grid::{
    build_week, local_midnight, parse_time_zone, week_start_for, HourSlot, SLOTS_PER_WEEK,
};
use crate::selection::{RangeChange, Selection, SelectionMachine};
use chrono::{DateTime, Duration, Weekday};
use chrono_tz::Tz;
use hourgrid_common::AvailabilitySource;
use hourgrid_config::CalendarConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

fn check_index(index: usize) -> Result<(), CalendarError> {
    if index >= SLOTS_PER_WEEK {
        return Err(CalendarError::SlotOutOfRange(index));
    }
    Ok(())
}

/// Called with every committed range change, in the order the changes happened.
pub type RangeCallback = Box<dyn FnMut(&RangeChange) + Send>;

/// Rendering and behaviour switches for one calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSettings {
    pub time_zone: Tz,
    pub week_starts_on: Weekday,
    pub interactive: bool,
    pub show_booked: bool,
    pub currency: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            time_zone: Tz::Europe__Zurich,
            week_starts_on: Weekday::Sun,
            interactive: true,
            show_booked: true,
            currency: "CHF".to_string(),
        }
    }
}

impl CalendarSettings {
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        Ok(Self {
            time_zone: parse_time_zone(&config.time_zone)?,
            week_starts_on: config.week_starts_on,
            interactive: config.interactive,
            show_booked: config.show_booked,
            currency: config.currency.clone(),
        })
    }
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

pub struct WeekCalendar {
    settings: CalendarSettings,
    source: Arc<dyn AvailabilitySource>,
    week_start: DateTime<Tz>,
    machine: SelectionMachine,
    external_range: Option<String>,
    on_change: Option<RangeCallback>,
}

impl WeekCalendar {
    /// Calendar showing the week that starts at `week_start`.
    pub fn new(
        settings: CalendarSettings,
        source: Arc<dyn AvailabilitySource>,
        week_start: DateTime<Tz>,
    ) -> Self {
        Self {
            settings,
            source,
            week_start,
            machine: SelectionMachine::new(),
            external_range: None,
            on_change: None,
        }
    }

    /// Calendar showing the week that contains `now`.
    pub fn for_current_week(
        settings: CalendarSettings,
        source: Arc<dyn AvailabilitySource>,
        now: &DateTime<Tz>,
    ) -> Result<Self, CalendarError> {
        let local_now = now.with_timezone(&settings.time_zone);
        let week_start = week_start_for(&local_now, settings.week_starts_on)?;
        Ok(Self::new(settings, source, week_start))
    }

    /// Registers the change callback.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&RangeChange) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    pub fn week_start(&self) -> DateTime<Tz> {
        self.week_start
    }

    pub fn selection(&self) -> &Selection {
        self.machine.selection()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.machine.hovered()
    }

    pub(crate) fn machine(&self) -> &SelectionMachine {
        &self.machine
    }

    /// The current week's slots, freshly derived from the source.
    pub fn slots(&self) -> Vec<HourSlot> {
        build_week(self.week_start, self.source.as_ref())
    }

    /// Classes for every slot given the current selection.
    pub fn classes(&self, now: &DateTime<Tz>) -> Vec<SlotClass> {
        classify_week(&self.slots(), &self.machine, now, self.settings.interactive)
    }

    /// Replaces the selection from grid indices without notifying.
    pub fn restore_selection(
        &mut self,
        start: Option<usize>,
        end: Option<usize>,
    ) -> Result<(), CalendarError> {
        let selection = Selection::from_indices(&self.slots(), start, end)?;
        self.machine = SelectionMachine::with_selection(selection);
        Ok(())
    }

    /// Routes a click on slot `index` into the selection machine.
    pub fn click(
        &mut self,
        index: usize,
        now: &DateTime<Tz>,
    ) -> Result<Option<RangeChange>, CalendarError> {
        check_index(index)?;
        if !self.settings.interactive {
            return Ok(None);
        }
        let slots = self.slots();
        let change = self.machine.click(&slots, index, now)?;
        self.notify(change.as_ref());
        Ok(change)
    }

    pub fn hover(&mut self, index: usize) -> Result<(), CalendarError> {
        check_index(index)?;
        if !self.settings.interactive {
            return Ok(());
        }
        self.machine.hover(index)
    }

    /// Going back is refused once the shown week has started.
    pub fn can_go_back(&self, now: &DateTime<Tz>) -> bool {
        self.week_start >= *now
    }

    pub fn previous_week(
        &mut self,
        now: &DateTime<Tz>,
    ) -> Result<Option<RangeChange>, CalendarError> {
        if !self.can_go_back(now) {
            return Err(CalendarError::NavigationBlocked);
        }
        self.move_weeks(-1)
    }

    pub fn next_week(&mut self) -> Result<Option<RangeChange>, CalendarError> {
        self.move_weeks(1)
    }

    pub fn navigate(
        &mut self,
        direction: Direction,
        now: &DateTime<Tz>,
    ) -> Result<Option<RangeChange>, CalendarError> {
        match direction {
            Direction::Previous => self.previous_week(now),
            Direction::Next => self.next_week(),
        }
    }

    /// Follows the range owned by the parent. When it goes from set to cleared, the selection
    /// is dropped; the parent caused that change, so it is not reported back.
    pub fn set_external_range(&mut self, range: Option<String>) {
        if self.external_range.is_some() && range.is_none() {
            debug!("External range cleared, resetting selection");
            self.machine.reset_silently();
        }
        self.external_range = range;
    }

    fn move_weeks(&mut self, weeks: i64) -> Result<Option<RangeChange>, CalendarError> {
        let date = self.week_start.date_naive() + Duration::weeks(weeks);
        self.week_start = local_midnight(self.settings.time_zone, date)?;
        info!("Showing week starting {}", self.week_start);
        let change = self.machine.reset();
        self.notify(change.as_ref());
        Ok(change)
    }

    fn notify(&mut self, change: Option<&RangeChange>) {
        if let (Some(change), Some(callback)) = (change, self.on_change.as_mut()) {
            callback(change);
        }
    }
}
