// --- File: crates/hourgrid_config/src/models.rs ---

use chrono::{NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Calendar Config ---
/// A single hour with an explicit price. Makes a non-working hour bookable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CustomPriceConfig {
    /// Local start of the hour, e.g. "2025-05-10T20:00:00"
    pub hour: NaiveDateTime,
    pub price: Decimal,
}

/// Closed-open interval of local time, hour resolution.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IntervalConfig {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl IntervalConfig {
    pub fn contains(&self, hour: &NaiveDateTime) -> bool {
        self.start <= *hour && *hour < self.end
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CalendarConfig {
    /// IANA zone name the grid is rendered in
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    #[serde(default = "default_week_starts_on")]
    pub week_starts_on: Weekday,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// When false every click is ignored and no slot is marked active
    #[serde(default = "default_true")]
    pub interactive: bool,
    #[serde(default = "default_true")]
    pub show_booked: bool,
    /// How far past the anchor the availability source is asked for
    #[serde(default = "default_prefetch_hours")]
    pub prefetch_hours: i64,
    #[serde(default = "default_work_start_hour")]
    pub work_start_hour: u32,
    #[serde(default = "default_work_end_hour")]
    pub work_end_hour: u32,
    #[serde(default = "default_working_days")]
    pub working_days: Vec<Weekday>,
    #[serde(default)]
    pub default_price: Option<Decimal>,
    #[serde(default)]
    pub custom_prices: Vec<CustomPriceConfig>,
    #[serde(default)]
    pub booked: Vec<IntervalConfig>,
    #[serde(default)]
    pub unavailable: Vec<IntervalConfig>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            week_starts_on: default_week_starts_on(),
            currency: default_currency(),
            interactive: true,
            show_booked: true,
            prefetch_hours: default_prefetch_hours(),
            work_start_hour: default_work_start_hour(),
            work_end_hour: default_work_end_hour(),
            working_days: default_working_days(),
            default_price: None,
            custom_prices: Vec::new(),
            booked: Vec::new(),
            unavailable: Vec::new(),
        }
    }
}

fn default_time_zone() -> String {
    "Europe/Zurich".to_string()
}

fn default_week_starts_on() -> Weekday {
    Weekday::Sun
}

fn default_currency() -> String {
    "CHF".to_string()
}

fn default_true() -> bool {
    true
}

// One displayed week plus 21 hours of lookahead.
fn default_prefetch_hours() -> i64 {
    27 * 7
}

fn default_work_start_hour() -> u32 {
    9
}

fn default_work_end_hour() -> u32 {
    17
}

fn default_working_days() -> Vec<Weekday> {
    vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_calendar: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub calendar: Option<CalendarConfig>,
}
