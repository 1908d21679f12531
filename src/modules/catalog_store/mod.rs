//! Catalog store for categories and products
//!
//! Services talk to [`CatalogRepository`]; production wires in the Postgres
//! adapter, tests use the in-memory one.

#[cfg(test)]
mod memory;
mod postgres;
mod repository;

#[cfg(test)]
pub use memory::{FailingCatalogStore, InMemoryCatalogStore};
pub use postgres::PgCatalogStore;
pub use repository::CatalogRepository;
