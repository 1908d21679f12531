use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::products::handlers;
use crate::features::products::services::ProductListingService;

/// Create routes for the product listing feature
///
/// Mounted under the admin category router path.
pub fn routes(service: Arc<ProductListingService>) -> Router {
    Router::new()
        .route(
            "/api/admin/category/product-category",
            get(handlers::list_products_by_category),
        )
        .with_state(service)
}
