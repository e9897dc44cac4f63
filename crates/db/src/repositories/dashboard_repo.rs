//! Aggregate queries backing the dashboard.

use chrono::NaiveDate;
use inventra_core::asset_status::{STATUS_ACTIVE, STATUS_UNDER_REPAIR};
use sqlx::PgPool;

use crate::models::asset::Asset;
use crate::models::dashboard::{DashboardTotals, MonthlyCost, StatusCount};
use crate::repositories::asset_repo::COLUMNS as ASSET_COLUMNS;

/// Provides read-only dashboard aggregates.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Asset counters plus lifetime maintenance spend.
    pub async fn totals(pool: &PgPool) -> Result<DashboardTotals, sqlx::Error> {
        sqlx::query_as::<_, DashboardTotals>(
            "SELECT \
                (SELECT COUNT(*) FROM assets) AS total_assets, \
                (SELECT COUNT(*) FROM assets WHERE status = $1) AS active_assets, \
                (SELECT COUNT(*) FROM assets WHERE status = $2) AS repair_assets, \
                (SELECT COALESCE(SUM(cost), 0) FROM maintenance_logs) AS total_cost",
        )
        .bind(STATUS_ACTIVE)
        .bind(STATUS_UNDER_REPAIR)
        .fetch_one(pool)
        .await
    }

    /// Active assets whose next maintenance is due on or before `due_by`,
    /// soonest first. Overdue assets are included.
    pub async fn upcoming_maintenance(
        pool: &PgPool,
        due_by: NaiveDate,
        limit: i64,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets \
             WHERE status = $1 \
               AND next_maintenance_date IS NOT NULL \
               AND next_maintenance_date <= $2 \
             ORDER BY next_maintenance_date ASC, id ASC \
             LIMIT $3"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(STATUS_ACTIVE)
            .bind(due_by)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Number of assets per status. Statuses with no assets are omitted.
    pub async fn status_breakdown(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS total FROM assets GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }

    /// Maintenance spend per month for services on or after `since`.
    pub async fn monthly_costs(
        pool: &PgPool,
        since: NaiveDate,
    ) -> Result<Vec<MonthlyCost>, sqlx::Error> {
        sqlx::query_as::<_, MonthlyCost>(
            "SELECT to_char(service_date, 'YYYY-MM') AS month, SUM(cost) AS total \
             FROM maintenance_logs \
             WHERE service_date >= $1 \
             GROUP BY month \
             ORDER BY month ASC",
        )
        .bind(since)
        .fetch_all(pool)
        .await
    }
}
