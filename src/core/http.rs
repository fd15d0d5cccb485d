//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::config::ServiceConfig;
use crate::metrics::Metrics;
use crate::models::{AstroComputeInput, AstroComputeOutput, ComputeRequest};
use crate::services::EphemerisOracle;
use crate::signals::SignalEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SignalEngine>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(engine: SignalEngine, metrics: Metrics) -> Self {
        Self {
            engine: Arc::new(engine),
            metrics: Arc::new(metrics),
        }
    }
}

/// Liveness only; does not consult the ephemeris.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Always 200 for a well-formed body; degradation shows up in `confidence`.
pub async fn compute_signals(
    State(state): State<AppState>,
    Json(input): Json<AstroComputeInput>,
) -> Json<AstroComputeOutput> {
    let request = ComputeRequest::from(input);
    let derivation = state.engine.derive_with_outcome(&request);
    state.metrics.record_outcome(derivation.outcome);
    Json(derivation.result.into())
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/astro/compute", post(compute_signals))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    config: &ServiceConfig,
    oracle: Arc<dyn EphemerisOracle>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let metrics = Metrics::new()?;
    let engine = SignalEngine::new(oracle);

    if !engine.oracle_available() {
        tracing::warn!("Ephemeris unavailable - /astro/compute will return confidence 0.0");
    }

    let app = create_router(AppState::new(engine, metrics));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
