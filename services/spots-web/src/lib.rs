//! Fishing spots web application.
//!
//! Serves a single map page and the JSON API the page uses to create its
//! server-side view, report clicks, and save new spots.

pub mod config;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod state;
pub mod view;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use state::AppState;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Page
        .route("/", get(handlers::page::index_handler))
        // Spots
        .route("/api/spots", get(handlers::spots::list_spots_handler))
        // Views
        .route("/api/views", post(handlers::views::create_view_handler))
        .route(
            "/api/views/:view_id/events",
            post(handlers::views::view_event_handler),
        )
        .route(
            "/api/views/:view_id/spots",
            post(handlers::views::save_spot_handler),
        )
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
