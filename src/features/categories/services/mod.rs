mod category_service;
pub mod category_tree;

pub use category_service::CategoryService;
