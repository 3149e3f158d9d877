//! Liveness and store health.

use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store_ok = state.partitions.current().health_check().await.unwrap_or(false)
        && state.members.health_check().await.unwrap_or(false);

    Ok(Json(serde_json::json!({
        "success": true,
        "data": {
            "status": if store_ok { "ok" } else { "degraded" },
            "connections": state.hub.connection_count(),
        }
    })))
}
