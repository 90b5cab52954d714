//! Axum router construction for the hazard API.
//!
//! Assembles the REST routes into a single [`Router`] with CORS and
//! request tracing middleware.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Origins allowed to call the API from a browser.
///
/// The Vite dev server answers on both spellings of localhost, and
/// browsers treat them as distinct origins.
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Build the complete Axum router for the hazard API.
///
/// The router includes:
/// - `POST /hazards/` -- record a hazard report
/// - `GET /hazards/` -- list recent hazard reports
/// - `GET /health` -- liveness probe
///
/// Note the trailing slash: `/hazards` (without it) is a different path
/// and is not registered.
///
/// CORS admits the two local dev origins with credentials. Methods and
/// headers are mirrored from the preflight request because wildcard
/// grants cannot be combined with `allow_credentials(true)`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let origins = ALLOWED_ORIGINS.map(HeaderValue::from_static);

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route(
            "/hazards/",
            get(handlers::list_hazards).post(handlers::create_hazard),
        )
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
