//! Router assembly for the counter HTTP API.
//!
//! [`build_router`] wires the page and counter handlers to their routes with
//! CORS and tracing middleware layers.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Page
        .route("/", get(handlers::page::index))
        .route("/app.js", get(handlers::page::app_js))
        // Counter API
        .route(
            "/counter",
            get(handlers::counter::get_counter).post(handlers::counter::update_counter),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
