use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{catalog::Catalog, config::AppConfig, variant::VariantEditor};

pub type EditorSessions = Arc<RwLock<HashMap<Uuid, VariantEditor>>>;

/// Shared router state. Fixtures are read-only; editor sessions live until
/// the process exits.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub editors: EditorSessions,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        log::info!(
            "loaded fixtures: {} products, {} orders, {} customers, {} inventory rows",
            catalog.products.len(),
            catalog.orders.len(),
            catalog.customers.len(),
            catalog.inventory.len()
        );
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            editors: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
