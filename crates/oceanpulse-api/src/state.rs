//! Shared application state for the hazard API server.
//!
//! [`AppState`] holds the `PostgreSQL` pool handle that every request
//! handler borrows a store over. [`PgPool`] is internally reference
//! counted, so the clone stored here and the one owned by the server
//! binary share the same connection set.

use sqlx::PgPool;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the `hazards` table.
    pub pool: PgPool,
}

impl AppState {
    /// Create a new application state over a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
