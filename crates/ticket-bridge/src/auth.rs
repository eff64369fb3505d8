use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::config::TOKEN_HEADER;
use crate::state::AppState;

/// Axum middleware that gates webhook requests behind the shared token.
///
/// 1. No `bridge_token` configured → passthrough
/// 2. `X-Bridge-Token` header equals the token → passthrough
/// 3. Otherwise → 401 `{"error":"unauthorized"}`
pub async fn require_bridge_token(
    State(app): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let Some(token) = app.config.token() else {
        return next.run(req).await;
    };

    let presented = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    if presented == Some(token) {
        return next.run(req).await;
    }

    tracing::warn!(
        path = %req.uri().path(),
        header_present = presented.is_some(),
        "rejected webhook with bad token"
    );
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": "unauthorized" })),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
