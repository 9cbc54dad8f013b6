use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use vehicle_search::catalog::memory::InMemoryCatalog;
use vehicle_search::catalog::VehicleCatalog;
use vehicle_search::server::config::Args;
use vehicle_search::server::handlers::{SEARCH_API_PATH, SEARCH_PAGE_PATH};
use vehicle_search::server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    // 1. Catalog:
    let catalog = match &args.catalog {
        Some(path) => InMemoryCatalog::from_json_file(path)?,
        None => InMemoryCatalog::demo(),
    }
    .with_latency(Duration::from_millis(args.latency_ms));

    tracing::info!("Catalog: {}", catalog.describe());

    // 2. HTTP Router:
    let state = AppState::new(Arc::new(catalog), args.page_size);
    let app = build_router(state);

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(args.bind).await?;

    tracing::info!("HTTP server listening on {}", args.bind);
    tracing::info!(
        "  - Search page: http://{}{}?q=honda&sort=price_asc",
        args.bind,
        SEARCH_PAGE_PATH
    );
    tracing::info!("  - API endpoint: http://{}{}", args.bind, SEARCH_API_PATH);
    tracing::info!("Page size: {}", args.page_size);

    axum::serve(listener, app).await?;

    Ok(())
}
