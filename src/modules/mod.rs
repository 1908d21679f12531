//! Modules layer - Infrastructure components behind the feature services
//!
//! Contains the catalog store: the repository trait and its adapters.

pub mod catalog_store;
