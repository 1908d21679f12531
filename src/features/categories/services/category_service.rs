use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryNode, CategoryResponseDto, CreateCategoryDto};
use crate::features::categories::models::NewCategory;
use crate::features::categories::services::category_tree::{
    build_category_tree, resolve_category_path,
};
use crate::modules::catalog_store::CatalogRepository;
use crate::shared::validation::slugify;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn CatalogRepository>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CatalogRepository>) -> Self {
        Self { store }
    }

    /// Full category forest
    pub async fn list_tree(&self) -> Result<Vec<CategoryNode>> {
        let categories = self.store.list_categories().await?;
        Ok(build_category_tree(&categories, None))
    }

    /// Category at `path` with its subtree; `None` when the path does not resolve
    pub async fn get_by_path(&self, path: &str) -> Result<Option<CategoryNode>> {
        let categories = self.store.list_categories().await?;
        let node = resolve_category_path(&categories, path);
        if node.is_none() {
            tracing::info!("Category path '{}' did not resolve", path);
        }
        Ok(node)
    }

    /// Create a category; slug defaults to the slugified name
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        dto.validate()?;

        let name = dto.name.trim().to_string();
        let slug = match dto.slug {
            Some(slug) => slug,
            None => slugify(&name),
        };
        if slug.is_empty() {
            return Err(AppError::Validation(
                "name: must contain at least one letter or digit".to_string(),
            ));
        }

        let category = self
            .store
            .create_category(NewCategory {
                name,
                slug,
                parent_id: dto.parent_id,
                admin_id: dto.admin_id,
            })
            .await?;

        tracing::info!(
            "Category created: id={}, slug={}, level={}",
            category.id,
            category.slug,
            category.level
        );

        Ok(category.into())
    }
}
