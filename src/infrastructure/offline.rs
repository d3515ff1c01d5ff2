use crate::domain::entities::news_article::NewsArticle;
use crate::domain::entities::quote::Quote;
use crate::domain::error::DomainError;
use crate::domain::ports::market_data_source::MarketDataSource;
use crate::domain::values::symbol::Symbol;
use async_trait::async_trait;

/// Source for running without network access. Every call fails, so the
/// gateway always serves fallback data.
pub struct OfflineSource;

#[async_trait]
impl MarketDataSource for OfflineSource {
    fn name(&self) -> &str {
        "offline"
    }

    async fn fetch_quote(&self, _symbol: &Symbol, _api_key: &str) -> Result<Quote, DomainError> {
        Err(DomainError::Network("Live data disabled".into()))
    }

    async fn fetch_news(
        &self,
        _topic: &str,
        _limit: usize,
        _api_key: &str,
    ) -> Result<Vec<NewsArticle>, DomainError> {
        Err(DomainError::Network("Live data disabled".into()))
    }
}
