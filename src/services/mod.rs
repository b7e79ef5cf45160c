pub mod catalog_service;
pub mod session_service;

pub use catalog_service::{CatalogError, bundled_catalog, fetch_catalog, parse_catalog};
