//! Direct asset edits.
//!
//! The asset row is locked before any rule is checked, so a status change or
//! purchase-date edit is validated against the state it actually replaces.
//! Concurrent edits and recorded maintenance on the same asset serialize on
//! that lock.

use inventra_core::asset_status;
use inventra_core::error::CoreError;
use inventra_core::maintenance;
use inventra_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, UpdateAsset};
use crate::repositories::{AssetRepo, MaintenanceLogRepo};

/// Errors returned by [`AssetEditor::apply`].
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// The edit breaks an asset rule; nothing was written.
    #[error(transparent)]
    Rejected(#[from] CoreError),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}

pub struct AssetEditor;

impl AssetEditor {
    /// Apply a partial update to asset `id`.
    ///
    /// Returns `None` if the asset does not exist.
    pub async fn apply(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, EditError> {
        if let Some(Some(days)) = input.maintenance_interval_days {
            maintenance::validate_interval_days(days)?;
        }

        let mut tx = pool.begin().await?;

        let Some(current) = AssetRepo::lock_for_update(&mut *tx, id).await? else {
            return Ok(None);
        };

        if let Some(target) = input.status {
            asset_status::validate_transition(current.status, target)?;
        }

        if let Some(purchase_date) = input.purchase_date {
            let earliest = MaintenanceLogRepo::earliest_service_date(&mut *tx, id).await?;
            if let Some(earliest) = earliest.filter(|earliest| purchase_date > *earliest) {
                return Err(EditError::Rejected(CoreError::Validation(format!(
                    "Purchase date {purchase_date} is after the earliest recorded service \
                     on {earliest}"
                ))));
            }
        }

        let updated = AssetRepo::update(&mut *tx, id, input).await?;
        tx.commit().await?;

        if let Some(asset) = &updated {
            tracing::info!(
                asset_id = id,
                from = %current.status,
                to = %asset.status,
                "Asset updated",
            );
        }

        Ok(updated)
    }
}
