//! Second stage of the listing pipeline: in-memory refinement and facets.
//!
//! A product's effective size depends on two columns (`size_other` wins when
//! `size` is "Other"), so the size filter runs after the store query.

use std::collections::HashSet;

use crate::features::products::dtos::ProductFiltersDto;
use crate::features::products::models::Product;

/// Keep products whose effective size equals (case-insensitively) any of `sizes`.
/// An empty `sizes` list keeps everything.
pub fn filter_by_sizes(products: Vec<Product>, sizes: &[String]) -> Vec<Product> {
    if sizes.is_empty() {
        return products;
    }

    let wanted: HashSet<String> = sizes.iter().map(|s| s.to_lowercase()).collect();
    products
        .into_iter()
        .filter(|p| {
            p.effective_size()
                .is_some_and(|size| wanted.contains(&size.to_lowercase()))
        })
        .collect()
}

/// Distinct non-null conditions and effective sizes present in `products`, first-seen order
pub fn collect_facets(products: &[Product]) -> ProductFiltersDto {
    let conditions = distinct(products.iter().map(|p| p.product_condition.as_deref()));
    let sizes = distinct(products.iter().map(Product::effective_size));

    ProductFiltersDto {
        conditions: Some(conditions),
        sizes: Some(sizes),
    }
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .flatten()
        .filter(|v| seen.insert(*v))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::product;

    fn sized(id: i64, size: &str, size_other: Option<&str>) -> Product {
        let mut p = product(id, 1, "10.00");
        p.size = Some(size.to_string());
        p.size_other = size_other.map(String::from);
        p
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_size_filter_uses_effective_size() {
        let products = vec![
            sized(1, "Other", Some("M")),
            sized(2, "M", None),
            sized(3, "L", None),
            sized(4, "Other", None),
        ];

        let kept = filter_by_sizes(products, &["M".to_string()]);

        assert_eq!(ids(&kept), vec![1, 2]);
    }

    #[test]
    fn test_size_filter_is_case_insensitive_any_of() {
        let products = vec![sized(1, "m", None), sized(2, "XL", None), sized(3, "l", None)];

        let kept = filter_by_sizes(products, &["M".to_string(), "L".to_string()]);

        assert_eq!(ids(&kept), vec![1, 3]);
    }

    #[test]
    fn test_size_filter_does_not_match_other_literal_when_size_other_set() {
        let products = vec![sized(1, "Other", Some("XXL"))];

        assert!(filter_by_sizes(products, &["Other".to_string()]).is_empty());
    }

    #[test]
    fn test_empty_size_list_keeps_all() {
        let products = vec![sized(1, "M", None), product(2, 1, "1.00")];

        assert_eq!(ids(&filter_by_sizes(products, &[])), vec![1, 2]);
    }

    #[test]
    fn test_collect_facets() {
        let mut a = sized(1, "M", None);
        a.product_condition = Some("new".to_string());
        let mut b = sized(2, "Other", Some("42"));
        b.product_condition = Some("used".to_string());
        let mut c = sized(3, "M", None);
        c.product_condition = Some("new".to_string());
        let d = product(4, 1, "1.00");

        let facets = collect_facets(&[a, b, c, d]);

        assert_eq!(
            facets.conditions,
            Some(vec!["new".to_string(), "used".to_string()])
        );
        assert_eq!(facets.sizes, Some(vec!["M".to_string(), "42".to_string()]));
    }

    #[test]
    fn test_collect_facets_keeps_empty_strings_but_not_nulls() {
        let mut a = sized(1, "", None);
        a.product_condition = Some(String::new());
        let mut b = sized(2, "S", None);
        b.product_condition = None;

        let facets = collect_facets(&[a, b]);

        assert_eq!(facets.conditions, Some(vec![String::new()]));
        assert_eq!(facets.sizes, Some(vec![String::new(), "S".to_string()]));
    }

    #[test]
    fn test_collect_facets_empty() {
        let facets = collect_facets(&[]);

        assert_eq!(facets.conditions, Some(vec![]));
        assert_eq!(facets.sizes, Some(vec![]));
    }
}
