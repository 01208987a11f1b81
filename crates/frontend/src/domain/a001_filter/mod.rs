pub mod api;
pub mod catalog_cache;
