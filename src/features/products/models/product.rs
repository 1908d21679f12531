use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

use crate::shared::constants::OTHER_SIZE;

/// Product moderation status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "product_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Pending,
    Approved,
    Rejected,
}

/// Database model for product (listing-relevant columns only)
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Product {
    pub id: i64,
    pub category_id: i64,
    pub sku: Option<String>,
    pub product_condition: Option<String>,
    pub size: Option<String>,
    pub size_other: Option<String>,
    pub selling_price: Decimal,
    pub purchase_price: Option<Decimal>,
    pub brand: Option<String>,
    pub product_type: Option<String>,
    pub product_group: Option<String>,
    pub additional_info: Option<String>,
    pub front_photo: Option<String>,
    pub back_photo: Option<String>,
    /// JSON array of image paths, stored as text
    pub more_images: Option<String>,
    pub status: ProductStatus,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product may appear on the public listing
    pub fn is_listed(&self) -> bool {
        self.is_active && self.status == ProductStatus::Approved
    }

    /// Displayed size: `size_other` when `size` is "Other", else `size`
    pub fn effective_size(&self) -> Option<&str> {
        match self.size.as_deref() {
            Some(OTHER_SIZE) => self.size_other.as_deref(),
            other => other,
        }
    }

    /// Gallery images parsed from the JSON text column; unparsable text yields none
    pub fn gallery_images(&self) -> Vec<String> {
        self.more_images
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::product;

    #[test]
    fn test_effective_size() {
        let mut p = product(1, 1, "10.00");
        p.size = Some("M".to_string());
        assert_eq!(p.effective_size(), Some("M"));

        p.size = Some("Other".to_string());
        p.size_other = Some("XXL".to_string());
        assert_eq!(p.effective_size(), Some("XXL"));

        p.size_other = None;
        assert_eq!(p.effective_size(), None);

        p.size = None;
        assert_eq!(p.effective_size(), None);
    }

    #[test]
    fn test_is_listed_requires_active_and_approved() {
        let mut p = product(1, 1, "10.00");
        assert!(p.is_listed());

        p.status = ProductStatus::Pending;
        assert!(!p.is_listed());

        p.status = ProductStatus::Approved;
        p.is_active = false;
        assert!(!p.is_listed());
    }

    #[test]
    fn test_gallery_images() {
        let mut p = product(1, 1, "10.00");
        assert!(p.gallery_images().is_empty());

        p.more_images = Some(r#"["/a.jpg", "/b.jpg"]"#.to_string());
        assert_eq!(p.gallery_images(), vec!["/a.jpg", "/b.jpg"]);

        p.more_images = Some("not json".to_string());
        assert!(p.gallery_images().is_empty());
    }
}
