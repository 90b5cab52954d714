//! REST API endpoint handlers for the hazard server.
//!
//! All handlers go through the `PostgreSQL` pool in the shared
//! [`AppState`]; each request borrows a [`HazardStore`] over it for the
//! duration of the call, so a request is a single database round-trip.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/hazards/` | Record a hazard report |
//! | `GET` | `/hazards/` | List recent hazard reports |
//! | `GET` | `/health` | Liveness probe |

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use oceanpulse_db::{HazardRow, HazardStore, NewHazardRow};
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::AppState;

/// Number of reports the list endpoint returns when `limit` is absent.
const DEFAULT_LIST_LIMIT: u32 = 100;

/// Upper bound applied to the `limit` query parameter.
const MAX_LIST_LIMIT: u32 = 1000;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /hazards/`.
#[derive(Debug, serde::Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CreateHazardRequest {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Optional free-text description of the hazard.
    pub description: Option<String>,
}

/// Response body for `POST /hazards/`: the server-generated fields.
#[derive(Debug, serde::Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HazardCreated {
    /// Assigned hazard ID.
    pub id: i64,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<NewHazardRow> for HazardCreated {
    fn from(row: NewHazardRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
        }
    }
}

/// A single hazard report as returned by `GET /hazards/`.
#[derive(Debug, serde::Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Hazard {
    /// Assigned hazard ID.
    pub id: i64,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Free-text description, if one was reported.
    pub description: Option<String>,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<HazardRow> for Hazard {
    fn from(row: HazardRow) -> Self {
        Self {
            id: row.id,
            lat: row.lat,
            lon: row.lon,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

/// Query parameters for the `GET /hazards/` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct ListHazardsQuery {
    /// Maximum number of reports to return (default 100, max 1000).
    pub limit: Option<u32>,
}

// ---------------------------------------------------------------------------
// POST /hazards/ -- record a hazard report
// ---------------------------------------------------------------------------

/// Record a new hazard report.
///
/// Coordinates are stored exactly as given; `id` and `created_at` are
/// generated by the database and echoed back with status `201 Created`.
pub async fn create_hazard(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateHazardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let store = HazardStore::new(&state.pool);
    let row = store
        .insert(body.lat, body.lon, body.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(HazardCreated::from(row))))
}

// ---------------------------------------------------------------------------
// GET /hazards/ -- list recent hazard reports
// ---------------------------------------------------------------------------

/// List recent hazard reports, newest first.
///
/// # Query Parameters
///
/// - `limit`: Maximum number of reports to return (default 100, max 1000).
pub async fn list_hazards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListHazardsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .min(MAX_LIST_LIMIT);

    let store = HazardStore::new(&state.pool);
    let rows = store.list_recent(i64::from(limit)).await?;

    let hazards: Vec<Hazard> = rows.into_iter().map(Hazard::from).collect();
    Ok(Json(hazards))
}

// ---------------------------------------------------------------------------
// GET /health -- liveness probe
// ---------------------------------------------------------------------------

/// Report service liveness.
///
/// Static response; does not touch the database.
#[allow(clippy::unused_async)] // Axum handlers must be async
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "oceanpulse-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
