//! Maintenance recording rules.
//!
//! Guard clauses evaluated before a maintenance log is written, the
//! next-maintenance-date scheduling policy, and the request-shape validators
//! applied by the HTTP layer before it hands a request to the recorder.
//!
//! Guards run in a fixed order and stop at the first failure:
//!
//! 1. terminal asset (`Disposed` / `Lost`) cannot be serviced at all
//! 2. `UnderRepair` cannot be serviced straight into `Disposed`
//! 3. service date cannot precede the purchase date

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::asset_status::AssetStatus;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length for a technician name.
pub const MAX_TECHNICIAN_NAME_LEN: usize = 255;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A proposed maintenance record, already parsed into typed values.
///
/// Doubles as the JSON body of the record-maintenance endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaintenanceRequest {
    pub service_date: NaiveDate,
    pub cost: Decimal,
    pub technician_name: String,
    pub description: Option<String>,
    pub status_after_service: AssetStatus,
    /// Explicit override for the asset's next maintenance date.
    pub next_maintenance_date: Option<NaiveDate>,
}

impl MaintenanceRequest {
    /// Treat a blank description as absent so retries that send `""` and
    /// retries that omit the field share one idempotency key.
    pub fn normalized(mut self) -> Self {
        if self
            .description
            .as_deref()
            .is_some_and(|d| d.trim().is_empty())
        {
            self.description = None;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Business-rule rejections raised by the maintenance guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MaintenanceError {
    #[error("Cannot record maintenance moving asset from '{from}' to '{to}'")]
    InvalidTransition { from: AssetStatus, to: AssetStatus },

    #[error("Service date {service_date} is before the purchase date {purchase_date}")]
    InvalidTemporalOrder {
        service_date: NaiveDate,
        purchase_date: NaiveDate,
    },
}

// ---------------------------------------------------------------------------
// Guards
// ---------------------------------------------------------------------------

/// Reject any maintenance on a terminal asset, self-transition included.
pub fn check_serviceable(
    current: AssetStatus,
    target: AssetStatus,
) -> Result<(), MaintenanceError> {
    if current.is_terminal() {
        return Err(MaintenanceError::InvalidTransition {
            from: current,
            to: target,
        });
    }
    Ok(())
}

/// Reject servicing an asset under repair straight into disposal.
pub fn check_service_transition(
    current: AssetStatus,
    target: AssetStatus,
) -> Result<(), MaintenanceError> {
    if current == AssetStatus::UnderRepair && target == AssetStatus::Disposed {
        return Err(MaintenanceError::InvalidTransition {
            from: current,
            to: target,
        });
    }
    Ok(())
}

/// Reject a service date that falls before the purchase date (day granularity).
pub fn check_temporal_order(
    purchase_date: NaiveDate,
    service_date: NaiveDate,
) -> Result<(), MaintenanceError> {
    if service_date < purchase_date {
        return Err(MaintenanceError::InvalidTemporalOrder {
            service_date,
            purchase_date,
        });
    }
    Ok(())
}

/// Run every guard in order against the asset's current state.
pub fn check_guards(
    current: AssetStatus,
    purchase_date: NaiveDate,
    request: &MaintenanceRequest,
) -> Result<(), MaintenanceError> {
    check_serviceable(current, request.status_after_service)?;
    check_service_transition(current, request.status_after_service)?;
    check_temporal_order(purchase_date, request.service_date)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Scheduling
// ---------------------------------------------------------------------------

/// Compute the asset's next maintenance date after a service.
///
/// Priority: an explicit date wins; otherwise `service_date + interval_days`
/// when the asset has an interval. `None` means the stored value must be
/// left as it is (never cleared).
pub fn next_maintenance_date(
    service_date: NaiveDate,
    explicit: Option<NaiveDate>,
    interval_days: Option<i32>,
) -> Option<NaiveDate> {
    if explicit.is_some() {
        return explicit;
    }
    let days = u64::try_from(interval_days?).ok().filter(|d| *d > 0)?;
    service_date.checked_add_days(Days::new(days))
}

/// Validate a maintenance interval set on an asset.
pub fn validate_interval_days(days: i32) -> Result<(), CoreError> {
    if days < 1 {
        return Err(CoreError::Validation(format!(
            "Maintenance interval must be at least one day, got {days}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Request-shape validation (HTTP boundary)
// ---------------------------------------------------------------------------

/// Validate that a technician name is non-blank and within length limits.
pub fn validate_technician_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Technician name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_TECHNICIAN_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Technician name exceeds maximum length of {MAX_TECHNICIAN_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate that a submitted cost is not negative.
pub fn validate_cost(cost: Decimal) -> Result<(), CoreError> {
    if cost < Decimal::ZERO {
        return Err(CoreError::Validation(
            "Cost must not be negative".to_string(),
        ));
    }
    Ok(())
}

/// Validate that the service did not happen in the future.
pub fn validate_service_date(service_date: NaiveDate, today: NaiveDate) -> Result<(), CoreError> {
    if service_date > today {
        return Err(CoreError::Validation(format!(
            "Service date {service_date} must not be in the future"
        )));
    }
    Ok(())
}

/// Validate that an explicit next date lies strictly after the service date.
pub fn validate_next_maintenance_date(
    service_date: NaiveDate,
    next: Option<NaiveDate>,
) -> Result<(), CoreError> {
    match next {
        Some(next) if next <= service_date => Err(CoreError::Validation(format!(
            "Next maintenance date {next} must be after the service date {service_date}"
        ))),
        _ => Ok(()),
    }
}

/// Run all boundary validators for an inbound maintenance request.
pub fn validate_request(request: &MaintenanceRequest, today: NaiveDate) -> Result<(), CoreError> {
    validate_service_date(request.service_date, today)?;
    validate_cost(request.cost)?;
    validate_technician_name(&request.technician_name)?;
    validate_next_maintenance_date(request.service_date, request.next_maintenance_date)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
