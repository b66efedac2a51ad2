//! Axum router wiring.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", any(api::metrics))
        .route("/", any(api::root))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
