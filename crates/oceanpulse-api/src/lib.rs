//! HTTP API server for `OceanPulse` hazard reports.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`POST /hazards/`** to record a geolocated hazard report
//! - **`GET /hazards/`** to list recent reports, newest first
//! - **`GET /health`** as a liveness probe for dev tooling
//!
//! # Architecture
//!
//! Handlers borrow a [`HazardStore`](oceanpulse_db::HazardStore) over the
//! shared [`PgPool`](sqlx::PgPool) held in [`AppState`]; every request is
//! a single round-trip to `PostgreSQL`. CORS is restricted to the local
//! Vite dev origins with credentials enabled. Malformed input is rejected
//! by Axum's extractors before a handler runs, so handler errors are
//! always data layer failures.
//!
//! [`AppState`]: state::AppState

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
