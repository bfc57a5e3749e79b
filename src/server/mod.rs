//! HTTP API for the tour catalog.
//!
//! The panorama viewer frontend fetches the catalog from here. The catalog
//! is a `const` slice, so handlers share it with no state or locking.

mod handlers;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

pub fn build_router() -> Router {
    Router::new()
        .route("/api/locations", get(handlers::list))
        .route("/api/locations/{id}", get(handlers::by_id))
        .route("/api/search", get(handlers::search))
        .layer(CorsLayer::permissive())
}

pub async fn start(host: &str, port: u16) {
    let app = build_router();
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  Formosa Vista server listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        });
}
