use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{
    CategoryLookupDto, CategoryQuery, CategoryResponseDto, CreateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// Get the category tree, or a single category by slug path
///
/// Without `path` the whole forest is returned. With `path` the matching
/// category and its subtree are returned; an unknown path yields `data: null`.
#[utoipa::path(
    get,
    path = "/api/admin/category",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Category tree or resolved category", body = ApiResponse<CategoryLookupDto>),
    ),
    tag = "categories"
)]
pub async fn get_categories(
    State(service): State<Arc<CategoryService>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<ApiResponse<CategoryLookupDto>>> {
    let path = query
        .path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    let Some(path) = path else {
        let tree = service.list_tree().await?;
        return Ok(Json(ApiResponse::success(
            Some(CategoryLookupDto::Tree(tree)),
            Some("Categories fetched successfully".to_string()),
            None,
        )));
    };

    let node = service.get_by_path(path).await?;
    let message = if node.is_some() {
        "Category fetched successfully"
    } else {
        "Category not found"
    };

    Ok(Json(ApiResponse::success(
        Some(CategoryLookupDto::Node(node)),
        Some(message.to_string()),
        None,
    )))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/admin/category",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Parent category not found"),
        (status = 409, description = "Slug already used under this parent")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    let category = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(category),
            Some("Category created successfully".to_string()),
            None,
        )),
    ))
}
