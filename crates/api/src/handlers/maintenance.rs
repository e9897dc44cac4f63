//! Handlers for maintenance history and the record-maintenance endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use inventra_core::maintenance::{self, MaintenanceRequest};
use inventra_core::types::DbId;
use inventra_db::recorder::MaintenanceRecorder;
use inventra_db::repositories::MaintenanceLogRepo;

use super::find_asset;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /assets/{id}/maintenance
// ---------------------------------------------------------------------------

/// List an asset's maintenance history, most recent service first.
pub async fn list_maintenance(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_asset(&state.pool, asset_id).await?;
    let logs = MaintenanceLogRepo::list_by_asset(&state.pool, asset_id).await?;
    Ok(Json(DataResponse { data: logs }))
}

// ---------------------------------------------------------------------------
// POST /assets/{id}/maintenance
// ---------------------------------------------------------------------------

/// Record a maintenance event.
///
/// Boundary checks (future service date, negative cost, blank technician,
/// next date not after service) run first, then the recorder locks the asset,
/// applies the business guards and writes atomically. An identical resubmission returns
/// the stored log.
pub async fn record_maintenance(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
    Json(input): Json<MaintenanceRequest>,
) -> AppResult<impl IntoResponse> {
    let request = input.normalized();
    maintenance::validate_request(&request, Utc::now().date_naive())?;

    let log = MaintenanceRecorder::record(&state.pool, asset_id, &request)
        .await
        .inspect_err(|err| {
            tracing::warn!(asset_id, error = %err, "Maintenance rejected");
        })?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: log })))
}
