//! Vendor Compass server entrypoint.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use vendor_compass::adapters::http::{api_router, AppState};
use vendor_compass::adapters::JsonCatalogSource;
use vendor_compass::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let catalog_source = Arc::new(JsonCatalogSource::new(config.catalog.path.clone()));
    let state = AppState::new(catalog_source);
    let app = api_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        catalog = %config.catalog.path.display(),
        "vendor-compass listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
