//! pulsemock backend
//!
//! Serves synthetic system metrics for the demo dashboard:
//! - `/metrics` : JSON snapshot, CORS-open
//! - `/`        : CORS preflight (OPTIONS)
//! - `/healthz` : liveness

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use pulsemock_backend::{app_state::AppState, router};
use pulsemock_core::metrics::UniformSampler;

const LISTEN: &str = "0.0.0.0:5000";

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let listen: SocketAddr = LISTEN.parse().expect("listen address must be valid");

    let state = AppState::new(Arc::new(UniformSampler));
    let app = router::build_router(state);

    tracing::info!(%listen, "pulsemock backend starting");
    let listener = match tokio::net::TcpListener::bind(listen).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "failed to bind listen socket");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
