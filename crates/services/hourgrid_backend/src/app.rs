// File: services/hourgrid_backend/src/app.rs
use axum::{extract::State, routing::get, Json, Router};
use hourgrid_calendar::routes as calendar_routes;
use hourgrid_config::AppConfig;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    calendar: bool,
}

async fn health(State(config): State<Arc<AppConfig>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        calendar: hourgrid_common::enabled_calendar(&config).is_some(),
    })
}

/// Assembles the full application: API under `/api`, plus Swagger UI when built with `openapi`.
pub fn build_app(config: Arc<AppConfig>) -> Router {
    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Hourgrid API!" }))
        .route("/health", get(health))
        .with_state(config.clone())
        .merge(calendar_routes::routes(config));

    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use hourgrid_calendar::doc::CalendarApiDoc;
        use tracing::info;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Hourgrid API",
                version = "0.1.0",
                description = "Weekly availability calendar API",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Hourgrid", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(CalendarApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    app.layer(TraceLayer::new_for_http())
}
