use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::products::{
    dtos as products_dtos, handlers as products_handlers, models as products_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::get_categories,
        categories_handlers::create_category,
        // Products
        products_handlers::list_products_by_category,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Categories
            categories_dtos::CategoryNode,
            categories_dtos::CategoryLookupDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::CreateCategoryDto,
            ApiResponse<categories_dtos::CategoryLookupDto>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Products
            products_models::ProductStatus,
            products_dtos::ProductCardDto,
            products_dtos::ProductFiltersDto,
            products_dtos::CategoryProductsDto,
            ApiResponse<products_dtos::CategoryProductsDto>,
        )
    ),
    tags(
        (name = "categories", description = "Category tree and administration"),
        (name = "products", description = "Product listing by category path"),
    ),
    info(
        title = "Marketplace Catalog API",
        version = "0.1.0",
        description = "Category tree and product listing API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_catalog_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/admin/category"));
        assert!(doc
            .paths
            .paths
            .contains_key("/api/admin/category/product-category"));
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Docs".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Docs"));
    }
}
