//! Asset document constants and expiry classification.
//!
//! Documents (registration papers, tax stamps, insurance certificates) carry
//! an expiry date. The classification below is what the API attaches to each
//! listed document.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CoreError;

/// Maximum length of the document type label.
pub const MAX_DOC_TYPE_LEN: usize = 50;

/// A document is "expiring soon" when it expires within this many days.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Where a document stands relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentExpiry {
    Expired,
    ExpiringSoon,
    Valid,
}

/// Classify a document's expiry date against `today`.
///
/// A document expiring today is still valid for today and counts as
/// expiring soon.
pub fn classify_expiry(expiry_date: NaiveDate, today: NaiveDate) -> DocumentExpiry {
    let remaining = (expiry_date - today).num_days();
    if remaining < 0 {
        DocumentExpiry::Expired
    } else if remaining <= EXPIRY_WARNING_DAYS {
        DocumentExpiry::ExpiringSoon
    } else {
        DocumentExpiry::Valid
    }
}

/// Validate the document type label.
pub fn validate_doc_type(doc_type: &str) -> Result<(), CoreError> {
    if doc_type.trim().is_empty() {
        return Err(CoreError::Validation(
            "Document type must not be empty".to_string(),
        ));
    }
    if doc_type.chars().count() > MAX_DOC_TYPE_LEN {
        return Err(CoreError::Validation(format!(
            "Document type exceeds maximum length of {MAX_DOC_TYPE_LEN} characters"
        )));
    }
    Ok(())
}
