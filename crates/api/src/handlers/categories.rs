//! Handlers for asset categories.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use inventra_db::models::category::CreateCategory;
use inventra_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /categories
///
/// A duplicate slug surfaces as 409 through the `uq_categories_slug` constraint.
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, slug = %category.slug, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}
