//! Asset status values and the general transition predicate.
//!
//! The predicate here is the type-level rule set used for direct asset edits.
//! The maintenance recorder layers its own stricter guards on top (see
//! [`crate::maintenance`]).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Asset is in service and in good condition.
pub const STATUS_ACTIVE: &str = "active";
/// Asset is out of service while being repaired.
pub const STATUS_UNDER_REPAIR: &str = "repair";
/// Asset has been written off.
pub const STATUS_DISPOSED: &str = "disposed";
/// Asset cannot be located.
pub const STATUS_LOST: &str = "lost";

/// All valid persisted status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_ACTIVE,
    STATUS_UNDER_REPAIR,
    STATUS_DISPOSED,
    STATUS_LOST,
];

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

/// Lifecycle status shared by `assets.status` and
/// `maintenance_logs.status_after_service`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "repair")]
    UnderRepair,
    #[serde(rename = "disposed")]
    Disposed,
    #[serde(rename = "lost")]
    Lost,
}

impl AssetStatus {
    /// Every status, in display order.
    pub const ALL: [AssetStatus; 4] = [
        AssetStatus::Active,
        AssetStatus::UnderRepair,
        AssetStatus::Disposed,
        AssetStatus::Lost,
    ];

    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => STATUS_ACTIVE,
            Self::UnderRepair => STATUS_UNDER_REPAIR,
            Self::Disposed => STATUS_DISPOSED,
            Self::Lost => STATUS_LOST,
        }
    }

    /// Parse from a string, returning an error for unknown statuses.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_ACTIVE => Ok(Self::Active),
            STATUS_UNDER_REPAIR => Ok(Self::UnderRepair),
            STATUS_DISPOSED => Ok(Self::Disposed),
            STATUS_LOST => Ok(Self::Lost),
            other => Err(CoreError::Validation(format!(
                "Unknown asset status: '{other}'. Valid statuses: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::UnderRepair => "Under Repair",
            Self::Disposed => "Disposed",
            Self::Lost => "Lost",
        }
    }

    /// Disposed and Lost admit no transition other than to themselves.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Disposed | Self::Lost)
    }

    /// Whether the status may move from `self` to `target`.
    ///
    /// - Self-transition is always legal.
    /// - Terminal statuses cannot move anywhere else.
    /// - `UnderRepair` cannot go straight to `Disposed`.
    /// - Everything else is allowed.
    pub fn can_transition(&self, target: AssetStatus) -> bool {
        if *self == target {
            return true;
        }
        if self.is_terminal() {
            return false;
        }
        !matches!(
            (self, target),
            (AssetStatus::UnderRepair, AssetStatus::Disposed)
        )
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lets sqlx decode a `TEXT` column straight into the enum.
impl TryFrom<String> for AssetStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

/// Free-function form of [`AssetStatus::can_transition`].
pub fn can_transition(from: AssetStatus, to: AssetStatus) -> bool {
    from.can_transition(to)
}

/// Validate a direct (non-maintenance) status change on an asset.
pub fn validate_transition(from: AssetStatus, to: AssetStatus) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot change asset status from '{from}' to '{to}'"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
