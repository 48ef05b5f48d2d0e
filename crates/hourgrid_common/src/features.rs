//! Runtime feature checks.
//!
//! Compile-time switches use `#[cfg(feature = "...")]` (`openapi`); runtime switches live in
//! the configuration as `use_*` flags next to an optional section. A feature is on only when
//! both are present.

use hourgrid_config::{AppConfig, CalendarConfig};

/// `true` when the flag is set and the matching section exists.
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// The calendar section, if the calendar is switched on.
pub fn enabled_calendar(config: &AppConfig) -> Option<&CalendarConfig> {
    let calendar = config.calendar.as_ref();
    if is_feature_enabled(config.use_calendar, calendar) {
        calendar
    } else {
        None
    }
}
