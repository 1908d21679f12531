//! Product listing under a category subtree.
//!
//! Listing is a two-stage pipeline: the category/status/condition predicate and
//! price ordering run in the store, then the size filter and facet extraction
//! run in memory.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/admin/category/product-category` | Products under `?path=`, with `sort`, `condition`, `sizes` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductListingService;
