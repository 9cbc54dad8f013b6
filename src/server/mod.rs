//! HTTP Server Module
//!
//! Axum adapters over the search core. Every route parses the raw query
//! string with the state codec, runs the search against the injected
//! catalog and hands the page to a presenter.
//!
//! ## Routes
//! - `GET /` -> redirect to the search page.
//! - `GET /api/search` -> JSON `{state, results, total, hasPrev, hasNext}`.
//! - `GET /custom/search` -> full HTML document, or the body fragment for
//!   `X-Requested-With: XMLHttpRequest` navigations.
//! - `GET /health` -> liveness plus catalog size.

pub mod config;
pub mod handlers;

use crate::catalog::VehicleCatalog;
use axum::{routing::get, Router};
use handlers::{
    handle_api_search, handle_health, handle_root, handle_search_page, HEALTH_PATH,
    SEARCH_API_PATH, SEARCH_PAGE_PATH,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;


/// Shared, read-only request context.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn VehicleCatalog>,
    pub page_size: usize,
}

impl AppState {
    /// `page_size` is clamped to at least 1.
    pub fn new(catalog: Arc<dyn VehicleCatalog>, page_size: usize) -> Self {
        Self {
            catalog,
            page_size: page_size.max(1),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route(SEARCH_API_PATH, get(handle_api_search))
        .route(SEARCH_PAGE_PATH, get(handle_search_page))
        .route(HEALTH_PATH, get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
