pub mod assets;
pub mod categories;
pub mod dashboard;
pub mod documents;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /categories                          list, create
///
/// /assets                              list, create
/// /assets/{id}                         get, update, delete
/// /assets/{id}/maintenance             list, record
/// /assets/{id}/documents               list, attach
///
/// /documents/{id}                      delete
///
/// /dashboard                           summary
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/assets", assets::router())
        .nest("/documents", documents::router())
        .nest("/dashboard", dashboard::router())
}
