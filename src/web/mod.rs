// Web server — Axum-based JSON API over the sentiment scorer.
//
// Two meaningful routes: GET / answers with a static liveness string, and
// POST /analyze scores a text. CORS is wide open because the expected
// caller is a browser frontend served from elsewhere.

use std::sync::Arc;

use anyhow::Result;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::scoring::traits::SentimentScorer;

pub mod error;
pub mod handlers;

/// Shared application state threaded through all Axum handlers.
///
/// The scorer is trait-boxed so tests can drop in a stub instead of a
/// loaded artifact.
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<dyn SentimentScorer>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(scorer: Arc<dyn SentimentScorer>, bind: &str, port: u16) -> Result<()> {
    let app = build_router(AppState { scorer });

    let addr = format!("{bind}:{port}");
    info!("Litmus API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so tests can drive it with `tower::oneshot`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/analyze", post(handlers::analyze::analyze))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root liveness check — static text, no side effects.
async fn home() -> impl IntoResponse {
    "API is live! POST to /analyze"
}

/// Deploy health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
