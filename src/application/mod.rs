pub mod catalog_service;
pub mod order_service;

pub use catalog_service::{derive_categories, CatalogService};
pub use order_service::OrderService;
