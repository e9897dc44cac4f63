//! Handlers for the asset catalog.
//!
//! Status and schedule fields only move through a recorded maintenance, with
//! one exception: a direct status edit is allowed when the general transition
//! predicate permits it.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use validator::Validate;

use inventra_core::error::CoreError;
use inventra_core::search::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use inventra_core::types::DbId;
use inventra_db::editor::AssetEditor;
use inventra_db::models::asset::{AssetDetail, AssetListParams, CreateAsset, UpdateAsset};
use inventra_db::models::asset_document::AssetDocumentView;
use inventra_db::repositories::{AssetDocumentRepo, AssetRepo, CategoryRepo, MaintenanceLogRepo};
use sqlx::PgPool;

use super::find_asset;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Reject a `category_id` that does not reference an existing category.
async fn ensure_category_exists(pool: &PgPool, category_id: DbId) -> AppResult<()> {
    if CategoryRepo::find_by_id(pool, category_id).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Category {category_id} does not exist"
        ))));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /assets
// ---------------------------------------------------------------------------

/// List assets with optional search and category filters, newest first.
pub async fn list_assets(
    State(state): State<AppState>,
    Query(params): Query<AssetListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);
    let search = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let assets =
        AssetRepo::list_filtered(&state.pool, search, params.category_id, limit, offset).await?;

    Ok(Json(DataResponse { data: assets }))
}

// ---------------------------------------------------------------------------
// POST /assets
// ---------------------------------------------------------------------------

/// Register a new asset.
pub async fn create_asset(
    State(state): State<AppState>,
    Json(input): Json<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    ensure_category_exists(&state.pool, input.category_id).await?;

    let asset = AssetRepo::create(&state.pool, &input).await?;

    tracing::info!(
        asset_id = asset.id,
        code = %asset.code,
        status = %asset.status,
        "Asset created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

// ---------------------------------------------------------------------------
// GET /assets/{id}
// ---------------------------------------------------------------------------

/// Get an asset with its maintenance history and documents.
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = find_asset(&state.pool, id).await?;
    let maintenance_logs = MaintenanceLogRepo::list_by_asset(&state.pool, id).await?;

    let today = Utc::now().date_naive();
    let documents = AssetDocumentRepo::list_by_asset(&state.pool, id)
        .await?
        .into_iter()
        .map(|doc| AssetDocumentView::new(doc, today))
        .collect();

    let detail = AssetDetail {
        status_label: asset.status.label(),
        asset,
        maintenance_logs,
        documents,
    };

    Ok(Json(DataResponse { data: detail }))
}

// ---------------------------------------------------------------------------
// PUT /assets/{id}
// ---------------------------------------------------------------------------

/// Partially update an asset.
///
/// [`AssetEditor`] checks the status transition and the purchase date
/// against the locked row. A `null` clears a nullable field.
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    if let Some(category_id) = input.category_id {
        ensure_category_exists(&state.pool, category_id).await?;
    }

    let asset = AssetEditor::apply(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }))?;

    Ok(Json(DataResponse { data: asset }))
}

// ---------------------------------------------------------------------------
// DELETE /assets/{id}
// ---------------------------------------------------------------------------

/// Delete an asset together with its logs and documents.
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AssetRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }));
    }

    tracing::info!(asset_id = id, "Asset deleted");

    Ok(StatusCode::NO_CONTENT)
}
