//! Inventra domain core.
//!
//! Pure domain rules with no I/O: asset status state machine, maintenance
//! guard clauses and scheduling policy, document expiry classification, and
//! shared constants used by the repository and HTTP layers.

pub mod asset_status;
pub mod dashboard;
pub mod document;
pub mod error;
pub mod maintenance;
pub mod search;
pub mod types;
