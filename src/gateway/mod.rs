//! HTTP surface.
//!
//! Routes:
//! - `GET /`: health probe.
//! - `POST /analyze`: runs a scan; the request's `mode` field picks BASIC
//!   or PRO (PRO by default, matching the main app path).
//! - `POST /analyze-pro`: explicit PRO alias for `/analyze`.
//!
//! CORS is wide open: the service fronts a mobile/web client and carries no
//! cookies or ambient credentials.

pub mod error;
pub mod types;

pub use error::GatewayError;
pub use types::{AnalyzeRequest, AnalyzeResponse, HealthResponse};

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::engine::ReputationEngine;
use crate::provider::SearchProvider;
use crate::query::ScanMode;

/// Shared request state.
///
/// `engine` is `None` when provider credentials were absent at startup; the
/// server still runs (health endpoint, useful error messages) but every scan
/// request fails with a configuration error, never a masked provider error.
pub struct AppState<P> {
    engine: Option<Arc<ReputationEngine<P>>>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }
}

impl<P> AppState<P> {
    pub fn new(engine: Option<Arc<ReputationEngine<P>>>) -> Self {
        Self { engine }
    }
}

/// Builds the application router.
pub fn router<P>(state: AppState<P>) -> Router
where
    P: SearchProvider + 'static,
{
    Router::new()
        .route("/", get(health))
        .route("/analyze", post(analyze::<P>))
        .route("/analyze-pro", post(analyze_pro::<P>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "trustcheck reputation scanner",
    })
}

async fn analyze<P>(
    State(state): State<AppState<P>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, GatewayError>
where
    P: SearchProvider + 'static,
{
    run_scan(&state, request).await
}

async fn analyze_pro<P>(
    State(state): State<AppState<P>>,
    Json(mut request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, GatewayError>
where
    P: SearchProvider + 'static,
{
    request.mode = ScanMode::Pro;
    run_scan(&state, request).await
}

async fn run_scan<P>(
    state: &AppState<P>,
    request: AnalyzeRequest,
) -> Result<Json<AnalyzeResponse>, GatewayError>
where
    P: SearchProvider + 'static,
{
    let engine = state
        .engine
        .as_ref()
        .ok_or(GatewayError::CredentialsNotConfigured)?;

    let verdict = engine
        .analyze_with_budget(&request.query, request.mode, request.max_results)
        .await?;

    Ok(Json(AnalyzeResponse::from_verdict(verdict, request.mode)))
}
