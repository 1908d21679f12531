use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryNode;
use crate::features::categories::services::category_tree::CategoryIndex;
use crate::features::products::dtos::{CategoryProductsDto, ProductCardDto, ProductListingOptions};
use crate::features::products::services::product_filter::{collect_facets, filter_by_sizes};
use crate::features::products::services::ProductQuery;
use crate::modules::catalog_store::CatalogRepository;

/// Service for the public product listing under a category path
pub struct ProductListingService {
    store: Arc<dyn CatalogRepository>,
}

impl ProductListingService {
    pub fn new(store: Arc<dyn CatalogRepository>) -> Self {
        Self { store }
    }

    /// List products in the subtree of the category at `path`.
    ///
    /// An unresolved path is a normal outcome and yields the empty payload.
    pub async fn list_by_category_path(
        &self,
        path: &str,
        options: &ProductListingOptions,
    ) -> Result<CategoryProductsDto> {
        let categories = self.store.list_categories().await?;
        let index = CategoryIndex::new(&categories);

        let Some(category) = index.resolve(path) else {
            tracing::info!("No category for path '{}', returning empty listing", path);
            return Ok(CategoryProductsDto::empty());
        };

        let node = CategoryNode::with_children(category, index.tree(Some(category.id)));
        let category_ids = index.subtree_ids(category.id);

        let query = ProductQuery::new(category_ids, options.conditions.clone(), options.sort);
        let fetched = self.store.find_products(&query).await?;
        let fetched_count = fetched.len();

        let products = filter_by_sizes(fetched, &options.sizes);
        let filters = collect_facets(&products);

        tracing::debug!(
            "Listing for '{}': {} categories, {} fetched, {} after size filter",
            path,
            query.category_ids.len(),
            fetched_count,
            products.len()
        );

        Ok(CategoryProductsDto {
            category: Some(node),
            total_products: products.len(),
            filters,
            products: products.iter().map(ProductCardDto::from).collect(),
        })
    }
}
