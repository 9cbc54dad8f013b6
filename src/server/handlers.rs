use super::AppState;
use crate::render::page::{render_body, render_document};
use crate::search::engine::search_catalog;
use crate::search::state::parse;
use crate::search::types::SearchApiResponse;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, Redirect};
use axum::Json;
use serde::{Deserialize, Serialize};

pub const SEARCH_PAGE_PATH: &str = "/custom/search";
pub const SEARCH_API_PATH: &str = "/api/search";
pub const HEALTH_PATH: &str = "/health";

const INTERNAL_ERROR: &str = "Internal Server Error";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub catalog_size: usize,
}

fn internal_error_json() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: INTERNAL_ERROR.to_string(),
        }),
    )
}

/// True for fetch/XHR navigations that only want the swappable fragment.
fn wants_fragment(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
}

pub async fn handle_root() -> Redirect {
    Redirect::to(SEARCH_PAGE_PATH)
}

pub async fn handle_api_search(
    State(app): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<SearchApiResponse>, (StatusCode, Json<ErrorResponse>)> {
    let state = parse(query.as_deref().unwrap_or_default());

    match search_catalog(app.catalog.as_ref(), &state, app.page_size).await {
        Ok(page) => Ok(Json(SearchApiResponse { state, page })),
        Err(e) => {
            tracing::error!("API search failed: {}", e);
            Err(internal_error_json())
        }
    }
}

pub async fn handle_search_page(
    State(app): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    let state = parse(query.as_deref().unwrap_or_default());

    let page = match search_catalog(app.catalog.as_ref(), &state, app.page_size).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Search page failed: {}", e);
            return Err((StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR));
        }
    };

    if wants_fragment(&headers) {
        return Ok(Html(render_body(&state, &page, SEARCH_PAGE_PATH)));
    }

    match render_document(&state, &page, SEARCH_PAGE_PATH) {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to serialize boot state: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR))
        }
    }
}

pub async fn handle_health(
    State(app): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<ErrorResponse>)> {
    match app.catalog.vehicles().await {
        Ok(vehicles) => Ok(Json(HealthResponse {
            status: "ok".to_string(),
            catalog_size: vehicles.len(),
        })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Err(internal_error_json())
        }
    }
}
