pub mod catalog_queries;
pub mod inventory_queries;
pub mod location_queries;
