// --- File: crates/hourgrid_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! The calendar never talks to a booking backend directly. It asks an [`AvailabilitySource`]
//! for per-hour records and renders whatever comes back.

use chrono::{DateTime, Duration, NaiveDateTime};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Hours rendered in one week of the grid.
pub const HOURS_PER_WEEK: i64 = 7 * 24;

/// Format used to key availability records by hour.
pub const HOUR_KEY_FORMAT: &str = "%Y-%m-%dT%H:00:00";

/// Formats the local hour of `at` as an availability key, e.g. `2025-05-12T09:00:00`.
pub fn hour_key(at: &DateTime<Tz>) -> String {
    at.format(HOUR_KEY_FORMAT).to_string()
}

/// Same as [`hour_key`] for a naive local time.
pub fn naive_hour_key(at: &NaiveDateTime) -> String {
    at.format(HOUR_KEY_FORMAT).to_string()
}

/// Availability metadata for a single hour as delivered by the source.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourRecord {
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, example = "100"))]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub booked: bool,
    #[serde(default)]
    pub unavailable: bool,
    /// The price was set explicitly for this hour
    #[serde(default)]
    pub custom_price: bool,
    /// Outside the default operating hours
    #[serde(default)]
    pub non_working_hour: bool,
}

impl HourRecord {
    /// A plain bookable hour at `price`.
    pub fn priced(price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    /// Zero counts as no price.
    pub fn has_price(&self) -> bool {
        self.price.is_some_and(|p| !p.is_zero())
    }

    /// Non-working hour that no custom price opened up.
    pub fn is_blocked_non_working_hour(&self) -> bool {
        self.non_working_hour && !self.custom_price
    }

    /// Whether this hour can be part of a booked range.
    pub fn is_bookable(&self) -> bool {
        !self.booked && !self.unavailable && self.has_price() && !self.is_blocked_non_working_hour()
    }
}

/// The closed-open window of hours requested from a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl AvailabilityWindow {
    /// Window of `hours` hours starting at `start`.
    pub fn from_start(start: DateTime<Tz>, hours: i64) -> Self {
        Self {
            start,
            end: start + Duration::hours(hours),
        }
    }

    pub fn start_key(&self) -> String {
        hour_key(&self.start)
    }

    pub fn end_key(&self) -> String {
        hour_key(&self.end)
    }

    pub fn hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }
}

/// Supplies per-hour availability for a window of time.
///
/// Implementations must be cheap to call repeatedly with the same window: the calendar asks
/// again on every render and every click. Caching, fetching and failure handling all live
/// behind this trait; a source with nothing to say returns an empty map.
pub trait AvailabilitySource: Send + Sync {
    /// Records for the hours inside `window`, keyed by [`hour_key`].
    fn get_availability(&self, window: &AvailabilityWindow) -> HashMap<String, HourRecord>;

    /// How many hours past the week anchor to request. Sources that cache ahead can ask for
    /// more than a week; anything shorter than a week is raised to a week by the caller.
    fn prefetch_hours(&self) -> i64 {
        HOURS_PER_WEEK
    }
}
