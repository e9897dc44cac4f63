//! Asset entity model and DTOs.

use chrono::NaiveDate;
use inventra_core::asset_status::AssetStatus;
use inventra_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::asset_document::AssetDocumentView;
use super::maintenance_log::MaintenanceLog;

/// A row from the `assets` table.
///
/// `status` and the schedule fields are written by the maintenance recorder;
/// direct edits go through [`UpdateAsset`] and the transition predicate.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub category_id: DbId,
    #[sqlx(try_from = "String")]
    pub status: AssetStatus,
    pub purchase_date: NaiveDate,
    pub purchase_price: Option<Decimal>,
    pub location: Option<String>,
    pub image_path: Option<String>,
    pub maintenance_interval_days: Option<i32>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Asset row joined with its category name, used by list endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetWithCategory {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub asset: Asset,
    pub category_name: String,
}

/// An asset together with its maintenance history and documents.
#[derive(Debug, Serialize)]
pub struct AssetDetail {
    #[serde(flatten)]
    pub asset: Asset,
    pub status_label: &'static str,
    pub maintenance_logs: Vec<MaintenanceLog>,
    pub documents: Vec<AssetDocumentView>,
}

/// DTO for creating a new asset.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAsset {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub code: String,
    pub category_id: DbId,
    pub status: AssetStatus,
    pub purchase_date: NaiveDate,
    pub purchase_price: Option<Decimal>,
    pub location: Option<String>,
    pub image_path: Option<String>,
    #[validate(range(min = 1))]
    pub maintenance_interval_days: Option<i32>,
}

/// DTO for updating an existing asset.
///
/// An omitted field keeps its stored value. Nullable columns use
/// `Option<Option<T>>` so an explicit JSON `null` clears them.
///
/// Schedule fields (`last_maintenance_date`, `next_maintenance_date`) are
/// not editable here; they only move through a recorded maintenance.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAsset {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub code: Option<String>,
    pub category_id: Option<DbId>,
    pub status: Option<AssetStatus>,
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub purchase_price: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_path: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub maintenance_interval_days: Option<Option<i32>>,
}

/// Map a present field to `Some`, keeping `null` as `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query parameters for listing assets.
#[derive(Debug, Default, Deserialize)]
pub struct AssetListParams {
    /// Case-insensitive substring match on name or code.
    pub search: Option<String>,
    pub category_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
