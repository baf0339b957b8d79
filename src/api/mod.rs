//! API module for the e-commerce dashboard
//!
//! Serves the computed views as JSON for a chart renderer.

pub mod handlers;
pub mod service;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use service::DashboardService;

pub fn router(service: Arc<DashboardService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/stats", get(handlers::get_stats))
        .route("/api/v1/menu", get(handlers::get_menu))
        .route("/api/v1/views/:view", get(handlers::get_view))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
