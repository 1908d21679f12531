use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{
    CategoryProductsDto, ProductCategoryQuery, ProductListingOptions,
};
use crate::features::products::services::ProductListingService;
use crate::shared::types::{ApiResponse, Meta};

/// List products under a category path
///
/// Covers the category and its whole subtree. Only active, approved products
/// are listed. `filters` reports the conditions and sizes present in the result.
#[utoipa::path(
    get,
    path = "/api/admin/category/product-category",
    params(ProductCategoryQuery),
    responses(
        (status = 200, description = "Products under the category", body = ApiResponse<CategoryProductsDto>),
        (status = 400, description = "path is required")
    ),
    tag = "products"
)]
pub async fn list_products_by_category(
    State(service): State<Arc<ProductListingService>>,
    Query(query): Query<ProductCategoryQuery>,
) -> Result<Json<ApiResponse<CategoryProductsDto>>> {
    let path = query
        .path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("path is required".to_string()))?;

    let options = ProductListingOptions::from(&query);
    let listing = service.list_by_category_path(path, &options).await?;

    let message = if listing.category.is_some() {
        "Products fetched successfully"
    } else {
        "Category not found"
    };

    let meta = Meta {
        total: listing.total_products as i64,
    };

    Ok(Json(ApiResponse::success(
        Some(listing),
        Some(message.to_string()),
        Some(meta),
    )))
}
