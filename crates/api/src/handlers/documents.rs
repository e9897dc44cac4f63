//! Handlers for asset documents (registration, tax, insurance).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use validator::Validate;

use inventra_core::document;
use inventra_core::error::CoreError;
use inventra_core::types::DbId;
use inventra_db::models::asset_document::{AssetDocumentView, CreateAssetDocument};
use inventra_db::repositories::AssetDocumentRepo;

use super::find_asset;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /assets/{id}/documents -- nearest expiry first, each tagged with its
/// expiry state as of today.
pub async fn list_documents(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_asset(&state.pool, asset_id).await?;

    let today = Utc::now().date_naive();
    let documents: Vec<AssetDocumentView> = AssetDocumentRepo::list_by_asset(&state.pool, asset_id)
        .await?
        .into_iter()
        .map(|doc| AssetDocumentView::new(doc, today))
        .collect();

    Ok(Json(DataResponse { data: documents }))
}

/// POST /assets/{id}/documents
pub async fn create_document(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
    Json(input): Json<CreateAssetDocument>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    document::validate_doc_type(&input.doc_type)?;

    find_asset(&state.pool, asset_id).await?;

    let created = AssetDocumentRepo::create(&state.pool, asset_id, &input).await?;

    tracing::info!(
        asset_id,
        document_id = created.id,
        doc_type = %created.doc_type,
        "Document attached",
    );

    let view = AssetDocumentView::new(created, Utc::now().date_naive());
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// DELETE /documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AssetDocumentRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AssetDocument",
            id,
        }));
    }

    tracing::info!(document_id = id, "Document deleted");

    Ok(StatusCode::NO_CONTENT)
}
