use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use axum::Json;
use serde_json::{json, Map, Value};

/// POST /webhook — echo the JSON payload back to the sender.
///
/// Token checking happens in `auth::require_bridge_token` before this runs.
/// A body that is missing, not declared as JSON, unparseable, or falsy
/// (`null`, `false`, `0`, `""`, `[]`, `{}`) is echoed as `{}`.
pub async fn receive(headers: HeaderMap, body: Bytes) -> Json<Value> {
    let payload = parse_payload(&headers, &body);
    tracing::info!(bytes = body.len(), "webhook received");
    Json(json!({ "status": "ok", "received": payload }))
}

fn parse_payload(headers: &HeaderMap, body: &[u8]) -> Value {
    if !is_json_content_type(headers) || body.is_empty() {
        return empty_object();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(v) if is_falsy(&v) => empty_object(),
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "webhook body is not valid JSON");
            empty_object()
        }
    }
}

/// `application/json` or any `application/*+json` type, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(ct) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let mime = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}
