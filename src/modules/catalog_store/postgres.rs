use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::products::models::Product;
use crate::features::products::services::ProductQuery;
use crate::modules::catalog_store::CatalogRepository;

/// Column list for `categories` SELECT queries.
const CATEGORY_COLUMNS: &str = "id, name, slug, parent_id, level, admin_id, created_at";

/// Postgres-backed catalog store
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn create_category(&self, new: NewCategory) -> Result<Category> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin category transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let parent = match new.parent_id {
            Some(parent_id) => {
                let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
                let parent = sqlx::query_as::<_, Category>(&query)
                    .bind(parent_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to load parent category: {:?}", e);
                        AppError::Database(e)
                    })?;
                Some(parent.ok_or_else(|| {
                    AppError::NotFound(format!("Parent category {} not found", parent_id))
                })?)
            }
            None => None,
        };

        let sibling_exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM categories
                WHERE parent_id IS NOT DISTINCT FROM $1 AND LOWER(slug) = LOWER($2)
            )
            "#,
        )
        .bind(new.parent_id)
        .bind(&new.slug)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check sibling slug: {:?}", e);
            AppError::Database(e)
        })?;

        if sibling_exists {
            return Err(AppError::Conflict(format!(
                "Category slug '{}' already exists under this parent",
                new.slug
            )));
        }

        let query = format!(
            "INSERT INTO categories (name, slug, parent_id, level, admin_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {CATEGORY_COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(&new.name)
            .bind(&new.slug)
            .bind(new.parent_id)
            .bind(Category::level_under(parent.as_ref()))
            .bind(new.admin_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert category: {:?}", e);
                AppError::Database(e)
            })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit category transaction: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(category)
    }

    async fn find_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        let mut qb = query.to_sql();
        qb.build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query products: {:?}", e);
                AppError::Database(e)
            })
    }
}
