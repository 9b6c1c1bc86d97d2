mod api;
mod config;
mod models;
mod page;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "deflection_service=debug,deflection_solver=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Beam Deflection Service");

    let config = ServiceConfig::from_env()?;
    tracing::info!("Input validation: {:?}", config.validation);

    // Build application router
    let app = api::create_router(&config);

    let addr = config.addr();
    tracing::info!("Listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /                 calculator page");
    tracing::info!("  POST /compute");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/v1/version");
    tracing::info!("  POST /api/v1/evaluate");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
