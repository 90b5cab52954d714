//! Hazard report persistence.
//!
//! Hazard reports are append-only: the write path inserts new rows and the
//! read path lists recent ones in reverse chronological order. There is no
//! update or delete surface.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::DbError;

/// Operations on the `hazards` table.
pub struct HazardStore<'a> {
    pool: &'a PgPool,
}

impl<'a> HazardStore<'a> {
    /// Create a new hazard store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a hazard report and return the generated row fields.
    ///
    /// `id` and `created_at` are produced inside `PostgreSQL` (`BIGSERIAL`
    /// and `DEFAULT now()`), so the insert carries a `RETURNING` clause
    /// rather than issuing a second query.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails, or
    /// [`DbError::NoRowReturned`] if the statement completes without
    /// yielding the generated columns.
    pub async fn insert(
        &self,
        lat: f64,
        lon: f64,
        description: Option<&str>,
    ) -> Result<NewHazardRow, DbError> {
        let row = sqlx::query_as::<_, NewHazardRow>(
            r"INSERT INTO hazards (lat, lon, description)
              VALUES ($1, $2, $3)
              RETURNING id, created_at",
        )
        .bind(lat)
        .bind(lon)
        .bind(description)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NoRowReturned)?;

        tracing::debug!(id = row.id, "Inserted hazard report");
        Ok(row)
    }

    /// Query the most recent hazard reports, limited to `limit` rows.
    ///
    /// Returns rows in descending `created_at` order (newest first), with
    /// `id` as a tiebreaker so reports sharing a timestamp keep a stable
    /// order between calls.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<HazardRow>, DbError> {
        let rows = sqlx::query_as::<_, HazardRow>(
            r"SELECT id, lat, lon, description, created_at
              FROM hazards
              ORDER BY created_at DESC, id DESC
              LIMIT $1",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

/// A row from the `hazards` table.
///
/// Uses runtime types rather than compile-time checked types to
/// avoid requiring a live database during builds.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HazardRow {
    /// Auto-incremented hazard ID.
    pub id: i64,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Free-text description of the hazard, if any.
    pub description: Option<String>,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// The database-generated columns of a freshly inserted hazard row.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct NewHazardRow {
    /// Auto-incremented hazard ID.
    pub id: i64,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
}
