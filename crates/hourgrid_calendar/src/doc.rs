// File: crates/hourgrid_calendar/src/doc.rs

#![cfg(feature = "openapi")]
use crate::calendar::Direction;
use crate::handlers::{ClickRequest, ClickResponse, NavigateRequest, NavigateResponse, WeekQuery};
use crate::selection::RangeChange;
use crate::view::{DayHeader, SlotContent, SlotView, WeekView};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_week_handler,
        crate::handlers::click_handler,
        crate::handlers::navigate_handler
    ),
    components(
        schemas(
            WeekQuery,
            WeekView,
            DayHeader,
            SlotView,
            SlotContent,
            ClickRequest,
            ClickResponse,
            NavigateRequest,
            NavigateResponse,
            Direction,
            RangeChange
        )
    ),
    tags(
        (name = "Calendar", description = "Weekly hour grid and range selection API")
    ),
    servers(
        (url = "/api", description = "Calendar API server")
    )
)]
pub struct CalendarApiDoc;
