mod config;
mod errors;
mod layout;
mod menu;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::menu::{FileMenuSource, MenuSource};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Flipbook API v{}", env!("CARGO_PKG_VERSION"));

    let menu_source = Arc::new(FileMenuSource::new(&config.menu_path));
    info!("Menu source: {}", config.menu_path);

    warm_up(menu_source.as_ref(), &config).await;

    // Build app state
    let state = AppState {
        menu_source,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Paginates the menu once at the raster page size so a broken document shows
/// up in the startup log. The server starts either way; the file is re-read
/// per request.
async fn warm_up(source: &dyn MenuSource, config: &Config) {
    match source.load().await {
        Ok(doc) => {
            let menu = menu::normalize(&doc);
            let metrics = layout::raster_metrics(config.raster_page_width, config.raster_page_height);
            let pages = layout::paginate(&menu, &metrics);
            info!(
                categories = menu.categories.len(),
                items = menu.item_count(),
                lines_per_page = metrics.lines_per_page,
                pages = pages.len(),
                "Menu ready"
            );
        }
        Err(e) => warn!("Menu could not be loaded at startup: {e}"),
    }
}
