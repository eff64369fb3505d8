use axum::Json;
use serde_json::{json, Value};

/// GET /healthz — liveness check; never requires the bridge token.
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
