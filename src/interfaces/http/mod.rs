pub mod handlers;
pub mod request;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

/// Build the axum router with all routes.
///
/// CORS is left permissive so a separately served frontend can call the
/// API during development; the embedded form page at `/` is same-origin.
pub fn build_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/predict", post(handlers::predict))
        .route("/api/health", get(handlers::health))
        .layer(cors)
}

/// Bind the listener and serve until the process is stopped.
pub async fn serve(listen: &str) -> std::io::Result<()> {
    let router = build_router();
    let listener = tokio::net::TcpListener::bind(listen).await?;
    tracing::info!("salary API listening on http://{listen}");
    axum::serve(listener, router).await
}
