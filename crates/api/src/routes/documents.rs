//! Route definitions for standalone document operations.
//!
//! Mounted at `/documents` by `api_routes()`. Listing and creation live
//! under `/assets/{id}/documents`.

use axum::routing::delete;
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

/// ```text
/// DELETE /{id}              -> delete_document
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(documents::delete_document))
}
