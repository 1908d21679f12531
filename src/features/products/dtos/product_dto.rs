use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::categories::dtos::CategoryNode;
use crate::features::products::models::Product;
use crate::shared::constants::{FALLBACK_PRODUCT_NAME, PLACEHOLDER_PRODUCT_IMAGE};

// =============================================================================
// QUERY
// =============================================================================

/// Query params for listing products under a category path
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductCategoryQuery {
    /// Slash-separated slug path (e.g. `men/clothing`), required
    pub path: Option<String>,
    /// `low` / `low-to-high` or `high` / `high-to-low`; anything else leaves results unordered
    pub sort: Option<String>,
    /// Comma-separated product conditions (any-of)
    pub condition: Option<String>,
    /// Comma-separated sizes (any-of, case-insensitive)
    pub sizes: Option<String>,
}

/// Price ordering for product listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    #[default]
    Unordered,
    PriceLowToHigh,
    PriceHighToLow,
}

impl ProductSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("low") | Some("low-to-high") => ProductSort::PriceLowToHigh,
            Some("high") | Some("high-to-low") => ProductSort::PriceHighToLow,
            _ => ProductSort::Unordered,
        }
    }

    pub fn as_sql(&self) -> Option<&'static str> {
        match self {
            ProductSort::Unordered => None,
            ProductSort::PriceLowToHigh => Some("ASC"),
            ProductSort::PriceHighToLow => Some("DESC"),
        }
    }
}

/// Parsed listing options
#[derive(Debug, Clone, Default)]
pub struct ProductListingOptions {
    pub sort: ProductSort,
    pub conditions: Vec<String>,
    pub sizes: Vec<String>,
}

impl From<&ProductCategoryQuery> for ProductListingOptions {
    fn from(query: &ProductCategoryQuery) -> Self {
        Self {
            sort: ProductSort::parse(query.sort.as_deref()),
            conditions: split_csv(query.condition.as_deref()),
            sizes: split_csv(query.sizes.as_deref()),
        }
    }
}

/// Split a comma-separated query value, trimming items and dropping blanks
pub fn split_csv(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Flattened product shape rendered by the storefront listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCardDto {
    #[serde(rename = "_id")]
    pub id: i64,
    pub sku: Option<String>,
    pub name: String,
    pub product_img: String,
    pub product_type: Option<String>,
    #[serde(rename = "product_additionalInfo")]
    pub product_additional_info: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub product_price: Decimal,
    pub product_condition: Option<String>,
    pub size: Option<String>,
    pub size_other: Option<String>,
    pub brand: Option<String>,
    pub category_id: i64,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Front photo, else first non-blank gallery image, else the placeholder
fn display_image(product: &Product) -> String {
    if let Some(front) = non_blank(product.front_photo.as_deref()) {
        return front.to_string();
    }
    product
        .gallery_images()
        .into_iter()
        .find(|img| !img.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_PRODUCT_IMAGE.to_string())
}

/// "{brand} {product_type}" trimmed, else the fallback name
fn display_name(product: &Product) -> String {
    let name = format!(
        "{} {}",
        product.brand.as_deref().unwrap_or_default(),
        product.product_type.as_deref().unwrap_or_default()
    );
    let name = name.trim();
    if name.is_empty() {
        FALLBACK_PRODUCT_NAME.to_string()
    } else {
        name.to_string()
    }
}

impl From<&Product> for ProductCardDto {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            sku: p.sku.clone(),
            name: display_name(p),
            product_img: display_image(p),
            product_type: p.product_type.clone(),
            product_additional_info: p.additional_info.clone(),
            product_price: p.selling_price,
            product_condition: p.product_condition.clone(),
            size: p.size.clone(),
            size_other: p.size_other.clone(),
            brand: p.brand.clone(),
            category_id: p.category_id,
        }
    }
}

/// Distinct filter values present in a result set; empty object when no category matched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductFiltersDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
}

/// Products under a resolved category path
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryProductsDto {
    pub category: Option<CategoryNode>,
    #[serde(rename = "totalProducts")]
    pub total_products: usize,
    pub filters: ProductFiltersDto,
    pub products: Vec<ProductCardDto>,
}

impl CategoryProductsDto {
    /// Payload for a path that does not resolve to a category
    pub fn empty() -> Self {
        Self {
            category: None,
            total_products: 0,
            filters: ProductFiltersDto::default(),
            products: Vec::new(),
        }
    }
}
