use axum::http::StatusCode;
use http_body_util::BodyExt;
use tempfile::TempDir;
use ticket_bridge::config::BridgeConfig;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Write `content` as the bridge config inside `dir` and load it.
fn load_config(dir: &TempDir, content: &str) -> BridgeConfig {
    let path = dir.path().join("config.yml");
    std::fs::write(&path, content).unwrap();
    BridgeConfig::load(&path).unwrap()
}

async fn send(
    app: axum::Router,
    req: axum::http::Request<axum::body::Body>,
) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    send(app, req).await
}

/// POST a JSON body, optionally with an `X-Bridge-Token` header.
async fn post_json(
    app: axum::Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let mut builder = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(t) = token {
        builder = builder.header("X-Bridge-Token", t);
    }
    let req = builder
        .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, req).await
}

/// POST a raw body with an arbitrary (or no) content type.
async fn post_raw(
    app: axum::Router,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, serde_json::Value) {
    let mut builder = axum::http::Request::builder().method("POST").uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let req = builder.body(axum::body::Body::from(body)).unwrap();
    send(app, req).await
}

// ---------------------------------------------------------------------------
// /healthz
// ---------------------------------------------------------------------------

#[tokio::test]
async fn healthz_returns_ok() {
    let app = ticket_bridge::build_router(BridgeConfig::default());
    let (status, json) = get(app, "/healthz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn healthz_is_public_when_token_configured() {
    let dir = TempDir::new().unwrap();
    let app = ticket_bridge::build_router(load_config(&dir, "bridge_token: test-secret\n"));
    let (status, _json) = get(app, "/healthz").await;

    assert_eq!(status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// /webhook without a token
// ---------------------------------------------------------------------------

#[tokio::test]
async fn webhook_echoes_json_body() {
    let dir = TempDir::new().unwrap();
    let app = ticket_bridge::build_router(load_config(&dir, "{}\n"));
    let payload = serde_json::json!({ "hello": "world" });
    let (status, json) = post_json(app, "/webhook", None, payload.clone()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["received"], payload);
}

#[tokio::test]
async fn webhook_missing_body_echoes_empty_object() {
    let app = ticket_bridge::build_router(BridgeConfig::default());
    let (status, json) = post_raw(app, "/webhook", None, "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["received"], serde_json::json!({}));
}

#[tokio::test]
async fn webhook_plain_text_echoes_empty_object() {
    let app = ticket_bridge::build_router(BridgeConfig::default());
    let (status, json) = post_raw(app, "/webhook", Some("text/plain"), "not-json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["received"], serde_json::json!({}));
}

#[tokio::test]
async fn webhook_malformed_json_echoes_empty_object() {
    let app = ticket_bridge::build_router(BridgeConfig::default());
    let (status, json) = post_raw(app, "/webhook", Some("application/json"), "{oops").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["received"], serde_json::json!({}));
}

#[tokio::test]
async fn webhook_empty_array_echoes_empty_object() {
    let app = ticket_bridge::build_router(BridgeConfig::default());
    let (status, json) = post_json(app, "/webhook", None, serde_json::json!([])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["received"], serde_json::json!({}));
}

#[tokio::test]
async fn webhook_get_is_not_allowed() {
    let app = ticket_bridge::build_router(BridgeConfig::default());
    let (status, _json) = get(app, "/webhook").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// /webhook with a token
// ---------------------------------------------------------------------------

#[tokio::test]
async fn webhook_accepts_matching_token() {
    let dir = TempDir::new().unwrap();
    let app = ticket_bridge::build_router(load_config(&dir, "bridge_token: test-secret\n"));
    let (status, json) = post_json(
        app,
        "/webhook",
        Some("test-secret"),
        serde_json::json!({ "x": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["received"]["x"], 1);
}

#[tokio::test]
async fn webhook_rejects_wrong_token() {
    let dir = TempDir::new().unwrap();
    let app = ticket_bridge::build_router(load_config(&dir, "bridge_token: test-secret\n"));
    let (status, json) = post_json(
        app,
        "/webhook",
        Some("wrong"),
        serde_json::json!({ "x": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "unauthorized");
}

#[tokio::test]
async fn webhook_rejects_missing_token() {
    let dir = TempDir::new().unwrap();
    let app = ticket_bridge::build_router(load_config(&dir, "bridge_token: test-secret\n"));
    let (status, _json) = post_json(app, "/webhook", None, serde_json::json!({ "x": 1 })).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
