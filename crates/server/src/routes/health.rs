use axum::{extract::State, http::StatusCode, Json};
use common::types::Health;
use tracing::warn;

use crate::state::ServerState;

/// Liveness plus a database ping.
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health { status: "ok" })),
        Err(e) => {
            warn!(event = "health_degraded", error = %e);
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health { status: "degraded" }))
        }
    }
}
