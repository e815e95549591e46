use std::sync::Arc;

use crate::{catalog::Catalog, config::AppConfig};

/// Shared application state injected into every Axum handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Catalog,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let catalog = Catalog::from_config(&config)?;
        Ok(Self {
            config: Arc::new(config),
            catalog,
        })
    }
}
