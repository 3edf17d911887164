//! HTTP handlers.

pub mod health_handler;
pub mod page_handler;

pub use health_handler::health_routes;
pub use page_handler::{not_found, page_routes};
