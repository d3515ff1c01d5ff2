use crate::application::gateway::{GatewayConfig, MarketDataGateway};
use crate::domain::error::DomainError;
use crate::domain::ports::credential_store::CredentialStore;
use crate::domain::ports::market_data_source::MarketDataSource;
use log::{info, warn};
use std::sync::Arc;

/// Symbol quoted to check a freshly entered key.
pub const VALIDATION_SYMBOL: &str = "AAPL";

pub struct ApiKeyUseCase {
    store: Arc<dyn CredentialStore>,
    source: Arc<dyn MarketDataSource>,
    config: GatewayConfig,
}

impl ApiKeyUseCase {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        source: Arc<dyn MarketDataSource>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            store,
            source,
            config,
        }
    }

    pub fn save(&self, key: &str) -> Result<String, DomainError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(DomainError::InvalidInput("API key must not be empty".into()));
        }
        self.store.set_api_key(key)?;
        Ok(key.to_string())
    }

    pub fn get(&self) -> Result<Option<String>, DomainError> {
        self.store.get_api_key()
    }

    pub fn clear(&self) -> Result<(), DomainError> {
        self.store.clear_api_key()
    }

    /// Save `key`, then confirm it yields a live quote. A key that only
    /// produces fallback data is removed again.
    pub async fn validate(&self, key: &str) -> Result<(), DomainError> {
        let key = self.save(key)?;
        let gateway = MarketDataGateway::new(self.source.clone(), self.config.with_api_key(key));

        match gateway.get_quote_sourced(VALIDATION_SYMBOL).await {
            Some(resolved) if resolved.is_live() => {
                info!("API key validated against {}", self.source.name());
                Ok(())
            }
            resolved => {
                self.store.clear_api_key()?;
                let reason = resolved
                    .as_ref()
                    .and_then(|r| r.reason())
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "no quote returned".into());
                warn!("API key rejected: {reason}");
                Err(DomainError::InvalidInput(format!("API key rejected: {reason}")))
            }
        }
    }
}
