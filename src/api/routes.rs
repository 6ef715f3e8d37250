//! Route table
//!
//! Binds the collection routes, the health check and the OpenAPI document,
//! then wraps everything in request tracing and, when enabled, CORS.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::cors::build_cors_layer;
use super::{handlers, openapi, AppState};
use crate::config::CorsConfig;

/// Creates the router.
pub fn router(state: AppState, cors: &CorsConfig) -> Router {
    let mut router = Router::new()
        .route("/events", get(handlers::list_events))
        .route("/projects", get(handlers::list_projects))
        .route("/team", get(handlers::list_team_members))
        .route("/alumni", get(handlers::list_alumni))
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(openapi::openapi_json))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors.enabled {
        router = router.layer(build_cors_layer());
    }

    router
}
