use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use crate::features::categories::models::Category;
use crate::features::products::models::{Product, ProductStatus};
use crate::modules::catalog_store::InMemoryCatalogStore;
use crate::shared::validation::slugify;

pub fn category(id: i64, name: &str, parent_id: Option<i64>, level: i32) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: slugify(name),
        parent_id,
        level,
        admin_id: Some(1),
        created_at: Utc::now(),
    }
}

/// An active, approved product with no optional attributes set
pub fn product(id: i64, category_id: i64, price: &str) -> Product {
    Product {
        id,
        category_id,
        sku: None,
        product_condition: None,
        size: None,
        size_other: None,
        selling_price: Decimal::from_str(price).unwrap(),
        purchase_price: None,
        brand: None,
        product_type: None,
        product_group: None,
        additional_info: None,
        front_photo: None,
        back_photo: None,
        more_images: None,
        status: ProductStatus::Approved,
        is_active: true,
        created_at: Utc::now(),
    }
}

/// Category forest used across tests:
///
/// ```text
/// men (1)
/// ├── clothing (2)
/// │   ├── shirts (3)
/// │   └── trousers (4)
/// └── shoes (5)
/// women (6)
/// └── clothing (7)
/// lost (8) -> parent 99 does not exist
/// ```
pub fn sample_categories() -> Vec<Category> {
    vec![
        category(1, "Men", None, 1),
        category(2, "Clothing", Some(1), 2),
        category(3, "Shirts", Some(2), 3),
        category(4, "Trousers", Some(2), 3),
        category(5, "Shoes", Some(1), 2),
        category(6, "Women", None, 1),
        category(7, "Clothing", Some(6), 2),
        category(8, "Lost", Some(99), 2),
    ]
}

pub fn store_with(categories: Vec<Category>, products: Vec<Product>) -> Arc<InMemoryCatalogStore> {
    Arc::new(InMemoryCatalogStore::new(categories, products))
}
