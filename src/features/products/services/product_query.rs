//! First stage of the listing pipeline: the predicate pushed down to the store.

use sqlx::{Postgres, QueryBuilder};

use crate::features::products::dtos::ProductSort;

/// Column list for `products` SELECT queries.
pub const PRODUCT_COLUMNS: &str = "\
    id, category_id, sku, product_condition, size, size_other, \
    selling_price, purchase_price, brand, product_type, product_group, \
    additional_info, front_photo, back_photo, more_images, status, \
    is_active, created_at";

/// Publicly listed products within a set of categories
#[derive(Debug, Clone)]
pub struct ProductQuery {
    pub category_ids: Vec<i64>,
    /// Exact `product_condition` values, any-of; empty means no restriction
    pub conditions: Vec<String>,
    pub sort: ProductSort,
}

impl ProductQuery {
    pub fn new(category_ids: Vec<i64>, conditions: Vec<String>, sort: ProductSort) -> Self {
        Self {
            category_ids,
            conditions,
            sort,
        }
    }

    /// Row-level predicate equivalent to the SQL `WHERE` clause
    #[cfg(test)]
    pub fn matches(&self, product: &crate::features::products::models::Product) -> bool {
        product.is_listed()
            && self.category_ids.contains(&product.category_id)
            && (self.conditions.is_empty()
                || product
                    .product_condition
                    .as_ref()
                    .is_some_and(|c| self.conditions.contains(c)))
    }

    /// Build the Postgres query; binds are owned so the builder outlives `self`
    pub fn to_sql(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = ANY("
        ));
        qb.push_bind(self.category_ids.clone());
        qb.push(") AND is_active = TRUE AND status = 'approved'");

        if !self.conditions.is_empty() {
            qb.push(" AND product_condition = ANY(");
            qb.push_bind(self.conditions.clone());
            qb.push(")");
        }

        if let Some(direction) = self.sort.as_sql() {
            qb.push(" ORDER BY selling_price ");
            qb.push(direction);
        }

        qb
    }
}
