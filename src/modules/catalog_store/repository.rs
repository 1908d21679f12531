use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::{Category, NewCategory};
use crate::features::products::models::Product;
use crate::features::products::services::ProductQuery;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Every category row, ordered by id (insertion order)
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Insert a category under an existing parent (or as a root).
    ///
    /// Fails with `NotFound` for an unknown parent and `Conflict` when a
    /// sibling already uses the slug. `level` is derived from the parent.
    async fn create_category(&self, new: NewCategory) -> Result<Category>;

    /// Products matching the store-side predicate, in the query's price order
    async fn find_products(&self, query: &ProductQuery) -> Result<Vec<Product>>;
}
