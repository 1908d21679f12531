//! Core infrastructure: configuration, database pool, errors, HTTP plumbing.

pub mod config;
pub mod database;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod openapi;
