pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::{middleware, Router};
use config::BridgeConfig;
use state::AppState;
use tower_http::trace::TraceLayer;

/// Build the axum Router with all routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(config: BridgeConfig) -> Router {
    let app_state = AppState::new(config);

    let webhook: Router<AppState> = Router::new()
        .route("/webhook", post(routes::webhook::receive))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth::require_bridge_token,
        ));

    Router::new()
        .route("/healthz", get(routes::health::healthz))
        .merge(webhook)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the bridge on `host:port`.
pub async fn serve(config: BridgeConfig, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(config, listener).await
}

/// Start the bridge on a pre-bound listener.
///
/// Lets the caller read the actual port first when binding to port 0.
pub async fn serve_on(config: BridgeConfig, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    let app = build_router(config);

    tracing::info!("ticket bridge listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
