//! Application state for Axum handlers.

use addrbook_config::AppMetadata;
use addrbook_core::HealthCheck;
use addrbook_service::AddressBook;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub address_book: Arc<dyn AddressBook>,
    pub health_checks: Arc<[Arc<dyn HealthCheck>]>,
    pub app: Arc<AppMetadata>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        address_book: Arc<dyn AddressBook>,
        health_checks: Vec<Arc<dyn HealthCheck>>,
        app: AppMetadata,
    ) -> Self {
        Self {
            address_book,
            health_checks: health_checks.into(),
            app: Arc::new(app),
        }
    }
}
