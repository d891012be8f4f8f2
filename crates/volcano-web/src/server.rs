//! Axum server setup and router construction.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::api::{self, AppState};

/// Build the full axum router.
///
/// The router serves:
/// - REST API at `/api/*`
/// - Optional static files for the frontend production build
pub fn build_router(app_state: AppState, static_dir: Option<PathBuf>) -> Router {
    // CORS layer for development (frontend dev server on a different port).
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/api/state", get(api::get_state))
        .route("/api/subject", post(api::post_subject))
        .route("/api/model", post(api::post_model))
        .route("/api/mode", post(api::post_mode))
        .route("/api/descriptors", post(api::post_descriptor))
        .route("/api/descriptors/{idx}", delete(api::delete_descriptor))
        .route("/api/negatives", post(api::post_negative))
        .route("/api/negatives/{idx}", delete(api::delete_negative))
        .route("/api/style-pack", post(api::post_style_pack))
        .route("/api/reset", post(api::post_reset))
        .route("/api/compile", post(api::post_compile))
        .with_state(app_state);

    let mut router = Router::new().merge(api_routes).layer(cors);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
}

/// Bind the listener, spawn the server task, and return the bound address.
pub async fn start_server(router: Router, bind_addr: SocketAddr) -> Result<SocketAddr, String> {
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| format!("failed to bind {bind_addr}: {e}"))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("failed to read bound address: {e}"))?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("Server stopped: {e}");
        }
    });

    info!("Studio API listening on http://{addr}");
    Ok(addr)
}
