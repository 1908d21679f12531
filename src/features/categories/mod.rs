//! Category hierarchy feature.
//!
//! Categories are stored flat with a self-referencing `parent_id` and rendered
//! as a nested tree. A category can be addressed by its slug path from a root,
//! e.g. `men/clothing/shirts`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/admin/category` | Full tree, or `?path=` resolved node with subtree |
//! | POST | `/api/admin/category` | Create a category under a parent (or as a root) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
