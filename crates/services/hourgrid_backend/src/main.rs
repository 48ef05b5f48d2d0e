// File: services/hourgrid_backend/src/main.rs
use hourgrid_common::{logging, Context};
use hourgrid_config::load_config;
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

mod app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config = logging::log_result(
        load_config().context("Failed to load configuration"),
        "Configuration loaded",
        "Startup aborted",
    )?;
    let config = Arc::new(config);
    if !config.use_calendar {
        info!("Calendar disabled, calendar routes will answer 503");
    }

    let app = app::build_app(config.clone());

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
