//! Dashboard-facing HTTP handlers.
//!
//! - `/metrics` : synthetic metrics snapshot (JSON, CORS-open). Any method
//!   is served; the demo frontend only issues GETs but nothing depends on
//!   the verb.
//! - `/`        : CORS preflight (OPTIONS); anything else gets an explicit
//!   404 instead of hanging with no reply.

use std::time::Instant;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};

use pulsemock_core::metrics::MetricsSnapshot;

use crate::app_state::AppState;

pub async fn metrics(State(app): State<AppState>) -> Response {
    let start = Instant::now();

    // Count first so the snapshot carries the post-increment value.
    let request_count = app.counter().record();
    let load = app.sampler().sample();
    let snapshot = MetricsSnapshot::new(load, request_count);

    // Encode before touching the response so a failure can never leave a
    // partial body on the wire.
    let body = match snapshot.encode() {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "failed to encode metrics response");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .into_response();
        }
    };

    tracing::info!(request_count, elapsed = ?start.elapsed(), "metrics served");

    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::CONTENT_TYPE, "application/json"),
        ],
        body,
    )
        .into_response()
}

pub async fn root(method: Method) -> Response {
    if method == Method::OPTIONS {
        tracing::info!("preflight request");
        return (
            StatusCode::OK,
            [
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
                (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            ],
        )
            .into_response();
    }

    // Nothing is served at the root path itself.
    StatusCode::NOT_FOUND.into_response()
}
