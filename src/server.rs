// src/server.rs

//! HTTP endpoint for the rewrite proxy.
//!
//! `POST /fetch` runs the fetch + rewrite pipeline for one URL; everything
//! else falls through to the static UI assets.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::fetch::{FetchGateway, HttpFetcher};
use crate::rewrite::DocumentRewriter;

/// Immutable state shared by all requests.
pub struct AppState {
    pub rewriter: DocumentRewriter,
    pub fetcher: Arc<dyn FetchGateway>,
}

impl AppState {
    /// Build the production state from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            rewriter: DocumentRewriter::new(&config.rewrite_target(), &config.rewrite.skip_tags)?,
            fetcher: Arc::new(HttpFetcher::new(&config.fetcher)?),
        })
    }
}

/// JSON request body for `POST /fetch`.
#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// JSON response body for a successful fetch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    pub success: bool,
    pub content: String,
    pub title: String,
    pub original_url: String,
}

/// Build the application router.
pub fn router(state: Arc<AppState>, public_dir: &str) -> Router {
    Router::new()
        .route("/fetch", post(fetch_handler))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}

/// Bind and serve until ctrl-c.
pub async fn serve(config: Config) -> Result<()> {
    config.validate()?;
    let state = Arc::new(AppState::from_config(&config)?);
    let app = router(state, &config.server.public_dir);

    let listener = TcpListener::bind(&config.server.bind_addr).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn fetch_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FetchRequest>,
) -> Result<Json<FetchResponse>> {
    let url = request
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::validation("URL is required"))?
        .to_string();

    log::info!("Fetching {url}");
    let page = state.fetcher.fetch(&url).await?;
    let document = state.rewriter.rewrite_document(&page.body)?;

    Ok(Json(FetchResponse {
        success: true,
        content: document.content,
        title: document.title,
        original_url: url,
    }))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch content: {other}"),
            ),
        };
        if status.is_server_error() {
            log::error!("Request failed: {self}");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {e}");
    }
}
