// File: crates/hourgrid_calendar/src/handlers.rs
use crate::availability::WorkingHoursAvailability;
use crate::calendar::{CalendarSettings, Direction, WeekCalendar};
use crate::error::CalendarError;
use crate::grid::parse_week_start;
use crate::view::WeekView;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use hourgrid_common::{enabled_calendar, log_error, AvailabilitySource, HourgridError, HttpStatusCode};
use hourgrid_config::AppConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// Shared state for the calendar handlers. Holds no selection: every request carries its own.
#[derive(Clone)]
pub struct CalendarState {
    pub config: Arc<AppConfig>,
    pub source: Arc<dyn AvailabilitySource>,
}

impl CalendarState {
    /// State backed by the configured working hours.
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let calendar_config = config.calendar.clone().unwrap_or_default();
        let source = Arc::new(WorkingHoursAvailability::from_config(&calendar_config));
        Self { config, source }
    }

    pub fn with_source(config: Arc<AppConfig>, source: Arc<dyn AvailabilitySource>) -> Self {
        Self { config, source }
    }

    /// Builds a calendar for `week_start` (or the current week) together with "now" in the
    /// calendar's time zone.
    fn calendar(
        &self,
        week_start: Option<&str>,
    ) -> Result<(WeekCalendar, DateTime<Tz>), CalendarError> {
        let calendar_config = enabled_calendar(&self.config).ok_or(CalendarError::Disabled)?;
        let settings = CalendarSettings::from_config(calendar_config)?;
        let now = Utc::now().with_timezone(&settings.time_zone);
        let calendar = match week_start {
            Some(date) => {
                let start = parse_week_start(date, settings.time_zone, settings.week_starts_on)?;
                WeekCalendar::new(settings, self.source.clone(), start)
            }
            None => WeekCalendar::for_current_week(settings, self.source.clone(), &now)?,
        };
        Ok((calendar, now))
    }
}

fn error_response(err: CalendarError) -> (StatusCode, String) {
    let err = HourgridError::from(err);
    log_error(&err, "Calendar request failed");
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}

// --- Data Structures ---
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct WeekQuery {
    /// Any date inside the wanted week, YYYY-MM-DD. Defaults to the current week.
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-12"))]
    pub week_start: Option<String>,
    pub start_index: Option<usize>,
    pub end_index: Option<usize>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ClickRequest {
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-12"))]
    pub week_start: Option<String>,
    pub start_index: Option<usize>,
    pub end_index: Option<usize>,
    /// Clicked slot, 0..168
    #[cfg_attr(feature = "openapi", schema(example = 34))]
    pub index: usize,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ClickResponse {
    pub start_index: Option<usize>,
    pub end_index: Option<usize>,
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-12T10:00:00/"))]
    pub range: String,
    /// Whether the range changed, i.e. whether a change notification would fire
    pub changed: bool,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct NavigateRequest {
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-12"))]
    pub week_start: Option<String>,
    pub start_index: Option<usize>,
    pub end_index: Option<usize>,
    pub direction: Direction,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct NavigateResponse {
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-18"))]
    pub week_start: String,
    pub range: String,
    pub changed: bool,
}

/// Handler to render one week with an optional selection.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/calendar/week",
    params(WeekQuery),
    responses(
        (status = 200, description = "Rendered week", body = WeekView),
        (status = 400, description = "Bad request (invalid date or selection indices)"),
        (status = 503, description = "Calendar disabled")
    ),
    tag = "Calendar"
))]
pub async fn get_week_handler(
    State(state): State<Arc<CalendarState>>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<WeekView>, (StatusCode, String)> {
    let (mut calendar, now) = state
        .calendar(query.week_start.as_deref())
        .map_err(error_response)?;
    calendar
        .restore_selection(query.start_index, query.end_index)
        .map_err(error_response)?;
    Ok(Json(calendar.render(&now)))
}

/// Handler to apply a slot click to a selection.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/calendar/click",
    request_body = ClickRequest,
    responses(
        (status = 200, description = "Selection after the click", body = ClickResponse),
        (status = 400, description = "Bad request (invalid date, selection or slot index)"),
        (status = 503, description = "Calendar disabled")
    ),
    tag = "Calendar"
))]
pub async fn click_handler(
    State(state): State<Arc<CalendarState>>,
    Json(request): Json<ClickRequest>,
) -> Result<Json<ClickResponse>, (StatusCode, String)> {
    let (mut calendar, now) = state
        .calendar(request.week_start.as_deref())
        .map_err(error_response)?;
    calendar
        .restore_selection(request.start_index, request.end_index)
        .map_err(error_response)?;
    let change = calendar
        .click(request.index, &now)
        .map_err(error_response)?;

    let (start_index, end_index) = calendar.selection().indices();
    let range = calendar.selection().range();
    info!("Click on slot {} -> {}", request.index, range);
    Ok(Json(ClickResponse {
        start_index,
        end_index,
        range,
        changed: change.is_some(),
    }))
}

/// Handler to move to the previous or next week. Drops the selection.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/calendar/navigate",
    request_body = NavigateRequest,
    responses(
        (status = 200, description = "The newly shown week", body = NavigateResponse),
        (status = 400, description = "Bad request (invalid date or selection)"),
        (status = 409, description = "Cannot go back past the current week"),
        (status = 503, description = "Calendar disabled")
    ),
    tag = "Calendar"
))]
pub async fn navigate_handler(
    State(state): State<Arc<CalendarState>>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<NavigateResponse>, (StatusCode, String)> {
    let (mut calendar, now) = state
        .calendar(request.week_start.as_deref())
        .map_err(error_response)?;
    calendar
        .restore_selection(request.start_index, request.end_index)
        .map_err(error_response)?;
    let change = calendar
        .navigate(request.direction, &now)
        .map_err(error_response)?;

    Ok(Json(NavigateResponse {
        week_start: calendar.week_start().format("%Y-%m-%d").to_string(),
        range: calendar.selection().range(),
        changed: change.is_some(),
    }))
}
