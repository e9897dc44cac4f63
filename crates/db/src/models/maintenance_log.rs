//! Maintenance log entity model.
//!
//! Logs are immutable and only ever created by
//! [`crate::recorder::MaintenanceRecorder`], so there is no create or update
//! DTO here; the recorder takes an
//! [`inventra_core::maintenance::MaintenanceRequest`].

use chrono::NaiveDate;
use inventra_core::asset_status::AssetStatus;
use inventra_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `maintenance_logs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MaintenanceLog {
    pub id: DbId,
    pub asset_id: DbId,
    pub service_date: NaiveDate,
    pub cost: Decimal,
    pub technician_name: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub status_after_service: AssetStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
