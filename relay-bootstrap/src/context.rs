use std::sync::Arc;

use anyhow::Result;

use relay_application::AppState;
use relay_domain::PayloadRepository;
use relay_infrastructure::{AppConfig, JsonLinesRepository};

pub struct AppContext {
    pub state: AppState,
    pub payloads: Arc<dyn PayloadRepository>,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            state: AppState::new(config.to_runtime_config()),
            payloads: Arc::new(JsonLinesRepository::new()),
        }
    }
}
