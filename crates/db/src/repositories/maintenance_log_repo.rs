//! Read access to the `maintenance_logs` table.
//!
//! Inserts happen only inside [`crate::recorder::MaintenanceRecorder`].

use chrono::NaiveDate;
use inventra_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::maintenance_log::MaintenanceLog;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, asset_id, service_date, cost, technician_name, \
    description, status_after_service, created_at, updated_at";

/// Provides read operations for maintenance logs.
pub struct MaintenanceLogRepo;

impl MaintenanceLogRepo {
    /// Find a maintenance log by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MaintenanceLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_logs WHERE id = $1");
        sqlx::query_as::<_, MaintenanceLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an asset's maintenance history, most recent service first.
    pub async fn list_by_asset(
        pool: &PgPool,
        asset_id: DbId,
    ) -> Result<Vec<MaintenanceLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_logs \
             WHERE asset_id = $1 \
             ORDER BY service_date DESC, id DESC"
        );
        sqlx::query_as::<_, MaintenanceLog>(&query)
            .bind(asset_id)
            .fetch_all(pool)
            .await
    }

    /// Count the maintenance logs recorded for an asset.
    pub async fn count_by_asset(pool: &PgPool, asset_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM maintenance_logs WHERE asset_id = $1")
            .bind(asset_id)
            .fetch_one(pool)
            .await
    }

    /// Earliest recorded service date for an asset, if it has any logs.
    ///
    /// Used to keep an edited purchase date from moving past existing history.
    pub async fn earliest_service_date(
        conn: &mut PgConnection,
        asset_id: DbId,
    ) -> Result<Option<NaiveDate>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<NaiveDate>>(
            "SELECT MIN(service_date) FROM maintenance_logs WHERE asset_id = $1",
        )
        .bind(asset_id)
        .fetch_one(conn)
        .await
    }
}
