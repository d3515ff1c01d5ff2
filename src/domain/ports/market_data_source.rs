use crate::domain::entities::news_article::NewsArticle;
use crate::domain::entities::quote::Quote;
use crate::domain::error::DomainError;
use crate::domain::values::symbol::Symbol;
use async_trait::async_trait;

/// A live quote/news provider.
///
/// Implementations report every failure (transport, malformed payload, provider
/// error or rate-limit marker) as an `Err`. Deciding what to show instead is the
/// gateway's job, not the source's.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &str;

    async fn fetch_quote(&self, symbol: &Symbol, api_key: &str) -> Result<Quote, DomainError>;

    async fn fetch_news(
        &self,
        topic: &str,
        limit: usize,
        api_key: &str,
    ) -> Result<Vec<NewsArticle>, DomainError>;
}
