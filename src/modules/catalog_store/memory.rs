use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::products::dtos::ProductSort;
use crate::features::products::models::Product;
use crate::features::products::services::ProductQuery;
use crate::modules::catalog_store::CatalogRepository;

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// In-memory catalog store mirroring the Postgres adapter's semantics
#[derive(Default)]
pub struct InMemoryCatalogStore {
    state: RwLock<State>,
}

impl InMemoryCatalogStore {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            state: RwLock::new(State {
                categories,
                products,
            }),
        }
    }

    fn poisoned() -> AppError {
        AppError::Internal("catalog store lock poisoned".to_string())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let state = self.state.read().map_err(|_| Self::poisoned())?;
        let mut categories = state.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn create_category(&self, new: NewCategory) -> Result<Category> {
        let mut state = self.state.write().map_err(|_| Self::poisoned())?;

        let parent = match new.parent_id {
            Some(parent_id) => Some(
                state
                    .categories
                    .iter()
                    .find(|c| c.id == parent_id)
                    .cloned()
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Parent category {} not found", parent_id))
                    })?,
            ),
            None => None,
        };

        if state
            .categories
            .iter()
            .any(|c| c.parent_id == new.parent_id && c.slug_matches(&new.slug))
        {
            return Err(AppError::Conflict(format!(
                "Category slug '{}' already exists under this parent",
                new.slug
            )));
        }

        let id = state.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let category = Category {
            id,
            name: new.name,
            slug: new.slug,
            parent_id: new.parent_id,
            level: Category::level_under(parent.as_ref()),
            admin_id: new.admin_id,
            created_at: Utc::now(),
        };
        state.categories.push(category.clone());

        Ok(category)
    }

    async fn find_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        let state = self.state.read().map_err(|_| Self::poisoned())?;
        let mut products: Vec<Product> = state
            .products
            .iter()
            .filter(|p| query.matches(p))
            .cloned()
            .collect();

        match query.sort {
            ProductSort::Unordered => {}
            ProductSort::PriceLowToHigh => products.sort_by_key(|p| p.selling_price),
            ProductSort::PriceHighToLow => {
                products.sort_by_key(|p| std::cmp::Reverse(p.selling_price))
            }
        }

        Ok(products)
    }
}

/// Catalog store whose every call fails with a database error
pub struct FailingCatalogStore;

impl FailingCatalogStore {
    fn unavailable() -> AppError {
        AppError::Database(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl CatalogRepository for FailingCatalogStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        Err(Self::unavailable())
    }

    async fn create_category(&self, _new: NewCategory) -> Result<Category> {
        Err(Self::unavailable())
    }

    async fn find_products(&self, _query: &ProductQuery) -> Result<Vec<Product>> {
        Err(Self::unavailable())
    }
}
