use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::categories::models::Category;
use crate::shared::validation::SLUG_REGEX;

/// Query params for fetching categories
#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryQuery {
    /// Slash-separated slug path (e.g. `men/clothing`). Omit for the full tree.
    pub path: Option<String>,
}

/// Response DTO for a single category row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<i64>,
    pub level: i32,
    pub admin_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            parent_id: c.parent_id,
            level: c.level,
            admin_id: c.admin_id,
            created_at: c.created_at,
        }
    }
}

/// Node of the category tree (hierarchical structure)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(no_recursion)]
pub struct CategoryNode {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub level: i32,
    #[serde(rename = "subCategories")]
    pub sub_categories: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn with_children(category: &Category, sub_categories: Vec<CategoryNode>) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            slug: category.slug.clone(),
            level: category.level,
            sub_categories,
        }
    }
}

/// Payload of `GET /api/admin/category`: the whole forest, or one resolved node
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CategoryLookupDto {
    Tree(Vec<CategoryNode>),
    Node(Option<CategoryNode>),
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    /// Parent category id; omit to create a root category
    pub parent_id: Option<i64>,
    /// Explicit slug; derived from `name` when omitted
    #[validate(regex(path = *SLUG_REGEX, message = "must be lowercase words separated by single hyphens"))]
    pub slug: Option<String>,
    /// Admin performing the creation
    pub admin_id: Option<i64>,
}
