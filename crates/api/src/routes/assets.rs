//! Route definitions for assets and their per-asset sub-resources.
//!
//! Mounted at `/assets` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{assets, documents, maintenance};
use crate::state::AppState;

/// Asset routes.
///
/// ```text
/// GET    /                        -> list_assets
/// POST   /                        -> create_asset
/// GET    /{id}                    -> get_asset
/// PUT    /{id}                    -> update_asset
/// DELETE /{id}                    -> delete_asset
/// GET    /{id}/maintenance        -> list_maintenance
/// POST   /{id}/maintenance        -> record_maintenance
/// GET    /{id}/documents          -> list_documents
/// POST   /{id}/documents          -> create_document
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route(
            "/{id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        .route(
            "/{id}/maintenance",
            get(maintenance::list_maintenance).post(maintenance::record_maintenance),
        )
        .route(
            "/{id}/documents",
            get(documents::list_documents).post(documents::create_document),
        )
}
