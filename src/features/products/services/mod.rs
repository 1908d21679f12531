pub mod product_filter;
mod product_listing_service;
pub mod product_query;

pub use product_listing_service::ProductListingService;
pub use product_query::ProductQuery;
