// ABOUTME: Request handlers for the overview page, JSON API and health check.
// ABOUTME: Runtime errors are reported in the response body with a 200 status.

use super::AppState;
use super::page::{PageContext, render_page};
use crate::summary::{self, ContainerSummary};
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use chrono::Local;
use serde::Serialize;

/// Body of `GET /api/containers`.
#[derive(Debug, Serialize)]
pub struct ContainersResponse {
    pub containers: Vec<ContainerSummary>,
    pub error: Option<String>,
    pub timestamp: String,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// `GET /`: HTML overview of every container.
///
/// Runtime errors are part of the page; only a template failure yields a 500.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let listing = summary::fetch_listing(&state.runtime).await;
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let headers = header_pairs(&headers);

    let page = render_page(&PageContext {
        containers: &listing.containers,
        error: listing.error.as_deref(),
        headers: &headers,
        timestamp: &timestamp,
    });

    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("failed to render page: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

/// `GET /api/containers`: the same listing as JSON.
pub async fn api_containers(State(state): State<AppState>) -> Json<ContainersResponse> {
    let listing = summary::fetch_listing(&state.runtime).await;

    Json(ContainersResponse {
        containers: listing.containers,
        error: listing.error,
        timestamp: iso_timestamp(),
    })
}

/// `GET /health`: liveness of this process only; the runtime is not consulted.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: iso_timestamp(),
    })
}

fn iso_timestamp() -> String {
    Local::now().to_rfc3339()
}

/// Flatten headers into name/value pairs, one pair per value.
///
/// Follows `HeaderMap` iteration order, which is not guaranteed to match the
/// order on the wire.
fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}
