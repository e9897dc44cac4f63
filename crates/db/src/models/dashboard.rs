//! Read models for the dashboard endpoint.

use inventra_core::asset_status::AssetStatus;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use super::asset::Asset;

/// Headline counters.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardTotals {
    pub total_assets: i64,
    pub active_assets: i64,
    pub repair_assets: i64,
    pub total_cost: Decimal,
}

/// Number of assets currently in a status.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    #[sqlx(try_from = "String")]
    pub status: AssetStatus,
    pub total: i64,
}

/// Total maintenance spend for one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonthlyCost {
    pub month: String,
    pub total: Decimal,
}

/// Everything the dashboard renders in one payload.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub totals: DashboardTotals,
    pub upcoming_maintenance: Vec<Asset>,
    pub status_breakdown: Vec<StatusCount>,
    pub monthly_costs: Vec<MonthlyCost>,
}
