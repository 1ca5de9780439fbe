use super::handlers::{handle_filter_options, handle_health, handle_not_found, handle_sales};
use super::types::{ENDPOINT_FILTER_OPTIONS, ENDPOINT_HEALTH, ENDPOINT_SALES};
use crate::dataset::loader::SharedDataset;
use axum::routing::get;
use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assembles the HTTP router around a shared dataset handle.
pub fn build_router(dataset: Arc<SharedDataset>) -> Router {
    Router::new()
        .route(ENDPOINT_SALES, get(handle_sales))
        .route(ENDPOINT_FILTER_OPTIONS, get(handle_filter_options))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .fallback(handle_not_found)
        .layer(Extension(dataset))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
