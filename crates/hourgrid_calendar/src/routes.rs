// --- File: crates/hourgrid_calendar/src/routes.rs ---

use crate::handlers::{click_handler, get_week_handler, navigate_handler, CalendarState};
use axum::{
    routing::{get, post},
    Router,
};
use hourgrid_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes of the calendar feature, backed by the configured
/// working hours.
pub fn routes(config: Arc<AppConfig>) -> Router {
    router(Arc::new(CalendarState::from_config(config)))
}

/// Same as [`routes`] with a caller-supplied state, e.g. a custom availability source.
pub fn router(state: Arc<CalendarState>) -> Router {
    Router::new()
        .route("/calendar/week", get(get_week_handler))
        .route("/calendar/click", post(click_handler))
        .route("/calendar/navigate", post(navigate_handler))
        .with_state(state)
}
