//! Maintenance recorder: the single write path for maintenance logs.
//!
//! In one transaction: locks and reads the asset row, runs the core guard
//! clauses against that row, replays an identical earlier submission if there
//! is one, and otherwise inserts the log and moves the asset's status and
//! schedule forward.

use inventra_core::maintenance::{self, MaintenanceError, MaintenanceRequest};
use inventra_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::maintenance_log::MaintenanceLog;
use crate::repositories::maintenance_log_repo::COLUMNS;
use crate::repositories::AssetRepo;

/// Errors returned by [`MaintenanceRecorder::record`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A guard clause rejected the request before anything was written.
    #[error(transparent)]
    Rejected(#[from] MaintenanceError),

    #[error("Asset {0} not found")]
    AssetNotFound(DbId),

    /// The storage layer failed; the transaction was rolled back.
    #[error("Persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}

/// Records maintenance against an asset as one atomic unit of work.
pub struct MaintenanceRecorder;

impl MaintenanceRecorder {
    /// Record a maintenance event for asset `asset_id`.
    ///
    /// Returns the new log, or the previously stored log when an identical
    /// `(asset, service_date, technician_name, description)` submission
    /// already exists. In the replay case nothing is written.
    pub async fn record(
        pool: &PgPool,
        asset_id: DbId,
        request: &MaintenanceRequest,
    ) -> Result<MaintenanceLog, RecordError> {
        let mut tx = pool.begin().await?;

        // Held until commit; concurrent submissions and edits queue here.
        let asset = AssetRepo::lock_for_update(&mut *tx, asset_id)
            .await?
            .ok_or(RecordError::AssetNotFound(asset_id))?;

        maintenance::check_guards(asset.status, asset.purchase_date, request)?;

        if let Some(existing) = find_identical(&mut *tx, asset_id, request).await? {
            tx.rollback().await?;
            tracing::debug!(
                asset_id,
                log_id = existing.id,
                "Identical maintenance already recorded, returning existing log",
            );
            return Ok(existing);
        }

        let insert = format!(
            "INSERT INTO maintenance_logs \
                (asset_id, service_date, cost, technician_name, description, status_after_service) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let log = sqlx::query_as::<_, MaintenanceLog>(&insert)
            .bind(asset.id)
            .bind(request.service_date)
            .bind(request.cost)
            .bind(&request.technician_name)
            .bind(&request.description)
            .bind(request.status_after_service.as_str())
            .fetch_one(&mut *tx)
            .await?;

        let next_date = maintenance::next_maintenance_date(
            request.service_date,
            request.next_maintenance_date,
            asset.maintenance_interval_days,
        );

        // A NULL next date keeps whatever the asset already had.
        sqlx::query(
            "UPDATE assets SET \
                status = $2, \
                last_maintenance_date = $3, \
                next_maintenance_date = COALESCE($4, next_maintenance_date), \
                updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(asset.id)
        .bind(request.status_after_service.as_str())
        .bind(request.service_date)
        .bind(next_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            asset_id = asset.id,
            log_id = log.id,
            from = %asset.status,
            to = %request.status_after_service,
            next_maintenance_date = ?next_date,
            "Maintenance recorded",
        );

        Ok(log)
    }
}

/// Look up a log matching the idempotency key. A `NULL` description matches
/// a `NULL` description.
async fn find_identical(
    conn: &mut PgConnection,
    asset_id: DbId,
    request: &MaintenanceRequest,
) -> Result<Option<MaintenanceLog>, sqlx::Error> {
    let query = format!(
        "SELECT {COLUMNS} FROM maintenance_logs \
         WHERE asset_id = $1 \
           AND service_date = $2 \
           AND technician_name = $3 \
           AND description IS NOT DISTINCT FROM $4 \
         ORDER BY id ASC \
         LIMIT 1"
    );
    sqlx::query_as::<_, MaintenanceLog>(&query)
        .bind(asset_id)
        .bind(request.service_date)
        .bind(&request.technician_name)
        .bind(&request.description)
        .fetch_optional(conn)
        .await
}
