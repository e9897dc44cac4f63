//! Repository for the `assets` table.

use inventra_core::search::like_pattern;
use inventra_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::asset::{Asset, AssetWithCategory, CreateAsset, UpdateAsset};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, code, category_id, status, purchase_date, \
    purchase_price, location, image_path, maintenance_interval_days, \
    last_maintenance_date, next_maintenance_date, created_at, updated_at";

/// Same columns qualified with the `a` alias for joined queries.
const QUALIFIED_COLUMNS: &str = "a.id, a.name, a.code, a.category_id, a.status, a.purchase_date, \
    a.purchase_price, a.location, a.image_path, a.maintenance_interval_days, \
    a.last_maintenance_date, a.next_maintenance_date, a.created_at, a.updated_at";

/// Provides CRUD operations for assets.
///
/// Schedule fields are never written here; see
/// [`crate::recorder::MaintenanceRecorder`]. Edits go through
/// [`crate::editor::AssetEditor`].
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets \
                (name, code, category_id, status, purchase_date, purchase_price, \
                 location, image_path, maintenance_interval_days) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.category_id)
            .bind(input.status.as_str())
            .bind(input.purchase_date)
            .bind(input.purchase_price)
            .bind(&input.location)
            .bind(&input.image_path)
            .bind(input.maintenance_interval_days)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List assets with their category name, newest first.
    ///
    /// `search` matches name or code case-insensitively; `category_id`
    /// restricts to a single category.
    pub async fn list_filtered(
        pool: &PgPool,
        search: Option<&str>,
        category_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AssetWithCategory>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if search.is_some() {
            conditions.push(format!(
                "(a.name ILIKE ${param_idx} OR a.code ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }
        if category_id.is_some() {
            conditions.push(format!("a.category_id = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {QUALIFIED_COLUMNS}, c.name AS category_name \
             FROM assets a \
             JOIN categories c ON c.id = a.category_id \
             {where_clause} \
             ORDER BY a.created_at DESC, a.id DESC \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, AssetWithCategory>(&query);

        if let Some(term) = search {
            q = q.bind(like_pattern(term));
        }
        if let Some(cid) = category_id {
            q = q.bind(cid);
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// Read an asset and hold its row lock until the enclosing transaction
    /// ends.
    pub async fn lock_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Update an asset. Only provided fields are applied; a nullable field
    /// provided as `None` is cleared.
    ///
    /// Runs on a connection so the caller can validate against a locked row
    /// first; see [`crate::editor::AssetEditor`].
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        // Outer `Some` means provided; the inner value may be `None` to clear.
        let price_provided = input.purchase_price.is_some();
        let price_value = input.purchase_price.flatten();
        let location_provided = input.location.is_some();
        let location_value = input.location.as_ref().and_then(|v| v.as_deref());
        let image_provided = input.image_path.is_some();
        let image_value = input.image_path.as_ref().and_then(|v| v.as_deref());
        let interval_provided = input.maintenance_interval_days.is_some();
        let interval_value = input.maintenance_interval_days.flatten();

        let query = format!(
            "UPDATE assets SET \
                name = COALESCE($2, name), \
                code = COALESCE($3, code), \
                category_id = COALESCE($4, category_id), \
                status = COALESCE($5, status), \
                purchase_date = COALESCE($6, purchase_date), \
                purchase_price = CASE WHEN $7 THEN $8 ELSE purchase_price END, \
                location = CASE WHEN $9 THEN $10 ELSE location END, \
                image_path = CASE WHEN $11 THEN $12 ELSE image_path END, \
                maintenance_interval_days = \
                    CASE WHEN $13 THEN $14 ELSE maintenance_interval_days END, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.category_id)
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.purchase_date)
            .bind(price_provided)
            .bind(price_value)
            .bind(location_provided)
            .bind(location_value)
            .bind(image_provided)
            .bind(image_value)
            .bind(interval_provided)
            .bind(interval_value)
            .fetch_optional(conn)
            .await
    }

    /// Delete an asset by ID. Maintenance logs and documents cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
