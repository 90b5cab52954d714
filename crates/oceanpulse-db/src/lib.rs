//! Data layer for the `OceanPulse` hazard API (`PostgreSQL`).
//!
//! A single relational table holds every hazard report. The write path
//! appends rows, the read path lists the most recent ones. This crate owns
//! the connection pool lifecycle and the store operations over that table.
//!
//! ```text
//! HTTP handlers
//!     |
//!     +-- HazardStore::insert       --> INSERT ... RETURNING id, created_at
//!     +-- HazardStore::list_recent  --> SELECT ... ORDER BY created_at DESC
//! ```
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`hazard_store`] -- Hazard report insertion and listing
//! - [`error`] -- Shared error types

pub mod error;
pub mod hazard_store;
pub mod postgres;

// Re-export primary types for convenience.
pub use error::DbError;
pub use hazard_store::{HazardRow, HazardStore, NewHazardRow};
pub use postgres::{PostgresConfig, PostgresPool};
