// --- File: crates/hourgrid_common/src/lib.rs ---

pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod logging; // Logging utilities
pub mod services; // Collaborator abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, conflict, internal_error, unavailable, validation_error, Context,
    HourgridError, HttpStatusCode,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error, log_result};

pub use features::{enabled_calendar, is_feature_enabled};

pub use services::{
    hour_key, naive_hour_key, AvailabilitySource, AvailabilityWindow, HourRecord,
    HOURS_PER_WEEK, HOUR_KEY_FORMAT,
};
