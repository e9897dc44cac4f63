//! Repository for the `asset_documents` table.

use inventra_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset_document::{AssetDocument, CreateAssetDocument};

/// Column list for `asset_documents` queries.
const COLUMNS: &str = "id, asset_id, doc_type, document_number, expiry_date, \
    file_path, created_at, updated_at";

/// Provides create/list/delete operations for asset documents.
pub struct AssetDocumentRepo;

impl AssetDocumentRepo {
    /// Attach a document to an asset, returning the created row.
    pub async fn create(
        pool: &PgPool,
        asset_id: DbId,
        input: &CreateAssetDocument,
    ) -> Result<AssetDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO asset_documents \
                (asset_id, doc_type, document_number, expiry_date, file_path) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetDocument>(&query)
            .bind(asset_id)
            .bind(&input.doc_type)
            .bind(&input.document_number)
            .bind(input.expiry_date)
            .bind(&input.file_path)
            .fetch_one(pool)
            .await
    }

    /// List an asset's documents, nearest expiry first.
    pub async fn list_by_asset(
        pool: &PgPool,
        asset_id: DbId,
    ) -> Result<Vec<AssetDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM asset_documents \
             WHERE asset_id = $1 \
             ORDER BY expiry_date ASC, id ASC"
        );
        sqlx::query_as::<_, AssetDocument>(&query)
            .bind(asset_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a document by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM asset_documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
