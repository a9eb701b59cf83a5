//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (acquires the store connection)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Does NOT wait for the store connection.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Goes through the shared connection provider, so a first call also warms
/// the connection. Returns 200 once connected, 503 with the connect error
/// otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    let ready = if state.store.is_connected() {
        Ok(())
    } else {
        state.store.get().await.map(|_| ())
    };

    match ready {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "connected": true })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "connected": false,
                "error": e.to_string()
            })),
        )
            .into_response(),
    }
}
