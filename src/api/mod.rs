//! HTTP surface
//!
//! Four read-only collection routes plus a health check and the OpenAPI document.

pub mod cors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod server;

use std::sync::Arc;

use crate::database::CatalogStore;

pub use routes::router;
pub use server::serve;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}
