pub mod assets;
pub mod categories;
pub mod dashboard;
pub mod documents;
pub mod maintenance;

use inventra_core::error::CoreError;
use inventra_core::types::DbId;
use inventra_db::models::asset::Asset;
use inventra_db::repositories::AssetRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Load an asset or fail with a 404.
pub(crate) async fn find_asset(pool: &PgPool, id: DbId) -> AppResult<Asset> {
    AssetRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }))
}
