pub mod app;
pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod queries;
pub mod routes;
pub mod utils;

pub use app::AppState;
pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{AppError, Result};
