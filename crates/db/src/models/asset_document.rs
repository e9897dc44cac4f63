//! Asset document (registration, tax, insurance) model and DTOs.

use chrono::NaiveDate;
use inventra_core::document::{self, DocumentExpiry};
use inventra_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `asset_documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetDocument {
    pub id: DbId,
    pub asset_id: DbId,
    pub doc_type: String,
    pub document_number: Option<String>,
    pub expiry_date: NaiveDate,
    pub file_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A document annotated with its expiry state relative to a reference date.
#[derive(Debug, Clone, Serialize)]
pub struct AssetDocumentView {
    #[serde(flatten)]
    pub document: AssetDocument,
    pub expiry_state: DocumentExpiry,
}

impl AssetDocumentView {
    pub fn new(document: AssetDocument, today: NaiveDate) -> Self {
        let expiry_state = document::classify_expiry(document.expiry_date, today);
        Self {
            document,
            expiry_state,
        }
    }
}

/// DTO for attaching a document to an asset.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssetDocument {
    #[validate(length(min = 1, max = 50))]
    pub doc_type: String,
    #[validate(length(max = 100))]
    pub document_number: Option<String>,
    pub expiry_date: NaiveDate,
    pub file_path: Option<String>,
}
