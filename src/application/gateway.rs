//! Market data gateway: live lookup first, local substitute on any failure.
//!
//! Each request runs `Idle -> Requesting -> Succeeded | Failed -> Resolved`.
//! The resolved value always carries renderable data; a failure only shows up
//! as the `reason` of [`Sourced::Fallback`].

use crate::application::fallback;
use crate::domain::entities::news_article::NewsArticle;
use crate::domain::entities::quote::Quote;
use crate::domain::error::DomainError;
use crate::domain::ports::market_data_source::MarketDataSource;
use crate::domain::values::symbol::Symbol;
use chrono::Utc;
use futures::future::join_all;
use log::{debug, warn};
use std::sync::Arc;

pub const DEFAULT_NEWS_TOPIC: &str = "financial_markets";
pub const DEFAULT_NEWS_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Provider API key. Live lookups are skipped entirely when absent.
    pub api_key: Option<String>,
    pub news_topic: String,
    pub news_limit: usize,
}

impl GatewayConfig {
    pub fn with_api_key(&self, key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            ..self.clone()
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            news_topic: DEFAULT_NEWS_TOPIC.to_string(),
            news_limit: DEFAULT_NEWS_LIMIT,
        }
    }
}

/// Where a resolved value came from.
#[derive(Debug)]
pub enum Sourced<T> {
    Live(T),
    Fallback { data: T, reason: DomainError },
}

impl<T> Sourced<T> {
    pub fn into_inner(self) -> T {
        match self {
            Sourced::Live(data) | Sourced::Fallback { data, .. } => data,
        }
    }

    pub fn data(&self) -> &T {
        match self {
            Sourced::Live(data) | Sourced::Fallback { data, .. } => data,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Sourced::Live(_))
    }

    pub fn reason(&self) -> Option<&DomainError> {
        match self {
            Sourced::Live(_) => None,
            Sourced::Fallback { reason, .. } => Some(reason),
        }
    }
}

#[derive(Clone)]
pub struct MarketDataGateway {
    source: Arc<dyn MarketDataSource>,
    config: GatewayConfig,
}

impl MarketDataGateway {
    pub fn new(source: Arc<dyn MarketDataSource>, config: GatewayConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn api_key(&self) -> Option<&str> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Quote for `symbol`, or `None` if the symbol itself is not a valid ticker.
    pub async fn get_quote(&self, symbol: &str) -> Option<Quote> {
        self.get_quote_sourced(symbol).await.map(Sourced::into_inner)
    }

    pub async fn get_quote_sourced(&self, symbol: &str) -> Option<Sourced<Quote>> {
        let symbol = match Symbol::new(symbol) {
            Ok(s) => s,
            Err(e) => {
                warn!("Skipping quote request: {e}");
                return None;
            }
        };

        let resolved = match self.live_quote(&symbol).await {
            Ok(quote) => Sourced::Live(quote),
            Err(reason) => {
                warn!("Using fallback quote for {symbol}: {reason}");
                let data = {
                    let mut rng = rand::rng();
                    fallback::synthesize_quote(&symbol, &mut rng)
                };
                Sourced::Fallback { data, reason }
            }
        };
        Some(resolved)
    }

    async fn live_quote(&self, symbol: &Symbol) -> Result<Quote, DomainError> {
        let key = self.api_key().ok_or(DomainError::MissingCredential)?;
        debug!("Fetching {symbol} from {}", self.source.name());

        let mut quote = self.source.fetch_quote(symbol, key).await?;
        if !quote.symbol.eq_ignore_ascii_case(symbol.as_str()) {
            return Err(DomainError::Parse(format!(
                "Requested {symbol}, provider answered {}",
                quote.symbol
            )));
        }
        if !quote.price.is_finite() || quote.price <= 0.0 {
            return Err(DomainError::Parse(format!(
                "Non-positive price {} for {symbol}",
                quote.price
            )));
        }
        if !quote.change.is_finite() || !quote.change_percent.is_finite() {
            return Err(DomainError::Parse(format!("Non-finite change for {symbol}")));
        }
        quote.symbol = symbol.to_string();
        if quote.company.trim().is_empty() || quote.company.eq_ignore_ascii_case(symbol.as_str()) {
            quote.company = fallback::company_name(symbol.as_str())
                .unwrap_or(symbol.as_str())
                .to_string();
        }
        Ok(quote)
    }

    /// Quotes for every valid symbol, in input order. Requests run concurrently;
    /// failed lookups come back as fallback quotes, so only invalid symbols are
    /// missing from the result.
    pub async fn get_quotes<S: AsRef<str>>(&self, symbols: &[S]) -> Vec<Quote> {
        self.get_quotes_sourced(symbols)
            .await
            .into_iter()
            .map(Sourced::into_inner)
            .collect()
    }

    /// Like [`Self::get_quotes`], keeping each quote's origin.
    pub async fn get_quotes_sourced<S: AsRef<str>>(&self, symbols: &[S]) -> Vec<Sourced<Quote>> {
        join_all(symbols.iter().map(|s| self.get_quote_sourced(s.as_ref())))
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    /// Headlines for `topic` (or the configured default), newest first.
    pub async fn get_news(&self, topic: Option<&str>) -> Vec<NewsArticle> {
        self.get_news_sourced(topic).await.into_inner()
    }

    pub async fn get_news_sourced(&self, topic: Option<&str>) -> Sourced<Vec<NewsArticle>> {
        let topic = topic
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(self.config.news_topic.as_str());

        match self.live_news(topic).await {
            Ok(articles) => Sourced::Live(articles),
            Err(reason) => {
                warn!("Using fallback news for '{topic}': {reason}");
                Sourced::Fallback {
                    data: fallback::fallback_news(Utc::now()),
                    reason,
                }
            }
        }
    }

    async fn live_news(&self, topic: &str) -> Result<Vec<NewsArticle>, DomainError> {
        let key = self.api_key().ok_or(DomainError::MissingCredential)?;
        debug!("Fetching '{topic}' news from {}", self.source.name());

        let mut articles = self
            .source
            .fetch_news(topic, self.config.news_limit, key)
            .await?;
        if articles.is_empty() {
            return Err(DomainError::Parse("Feed contained no articles".into()));
        }
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        articles.truncate(self.config.news_limit.max(1));
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::offline::OfflineSource;
    use async_trait::async_trait;

    /// Answers every quote request with the same canned quote.
    struct CannedSource(Quote);

    #[async_trait]
    impl MarketDataSource for CannedSource {
        fn name(&self) -> &str {
            "canned"
        }

        async fn fetch_quote(&self, _symbol: &Symbol, _api_key: &str) -> Result<Quote, DomainError> {
            Ok(self.0.clone())
        }

        async fn fetch_news(
            &self,
            _topic: &str,
            _limit: usize,
            _api_key: &str,
        ) -> Result<Vec<NewsArticle>, DomainError> {
            Ok(vec![])
        }
    }

    fn canned(quote: Quote) -> MarketDataGateway {
        MarketDataGateway::new(
            Arc::new(CannedSource(quote)),
            GatewayConfig::default().with_api_key("k"),
        )
    }

    fn offline() -> MarketDataGateway {
        MarketDataGateway::new(Arc::new(OfflineSource), GatewayConfig::default())
    }

    #[tokio::test]
    async fn test_missing_key_falls_back() {
        let gw = offline();
        let resolved = gw.get_quote_sourced("AAPL").await.unwrap();
        assert!(!resolved.is_live());
        assert!(matches!(resolved.reason(), Some(DomainError::MissingCredential)));
        assert_eq!(resolved.data().company, "Apple Inc.");
    }

    #[tokio::test]
    async fn test_blank_key_treated_as_missing() {
        let gw = MarketDataGateway::new(
            Arc::new(OfflineSource),
            GatewayConfig::default().with_api_key("   "),
        );
        let news = gw.get_news_sourced(None).await;
        assert!(matches!(news.reason(), Some(DomainError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_invalid_symbol_is_none() {
        let gw = offline();
        assert!(gw.get_quote("").await.is_none());
        assert!(gw.get_quote("no way").await.is_none());
    }

    #[tokio::test]
    async fn test_batch_keeps_order() {
        let gw = offline();
        let quotes = gw.get_quotes(&["AAPL", "UNKNOWN"]).await;
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].symbol, "AAPL");
        assert_eq!(quotes[1].symbol, "UNKNOWN");
        assert_eq!(quotes[1].change, 0.0);
    }

    #[tokio::test]
    async fn test_canned_quote_served_live() {
        let gw = canned(Quote::with_change("aapl".into(), String::new(), 190.0, 5.0));
        let resolved = gw.get_quote_sourced("AAPL").await.unwrap();
        assert!(resolved.is_live());
        assert_eq!(resolved.data().symbol, "AAPL");
        assert_eq!(resolved.data().company, "Apple Inc.");
    }

    #[tokio::test]
    async fn test_non_finite_change_falls_back() {
        let gw = canned(Quote {
            symbol: "AAPL".into(),
            company: String::new(),
            price: 182.52,
            change: f64::NAN,
            change_percent: 0.0,
        });
        let resolved = gw.get_quote_sourced("AAPL").await.unwrap();
        assert!(matches!(resolved.reason(), Some(DomainError::Parse(_))));
        let q = resolved.into_inner();
        assert!(q.change.is_finite());
        assert!(q.change == 0.0 || q.change.signum() == q.change_percent.signum());
    }

    #[tokio::test]
    async fn test_mismatched_symbol_falls_back() {
        let gw = canned(Quote::with_change("MSFT".into(), String::new(), 400.0, 1.0));
        let resolved = gw.get_quote_sourced("AAPL").await.unwrap();
        assert!(matches!(resolved.reason(), Some(DomainError::Parse(_))));
        assert_eq!(resolved.data().symbol, "AAPL");
    }

    #[tokio::test]
    async fn test_batch_sourced_keeps_origin() {
        let gw = canned(Quote::with_change("AAPL".into(), String::new(), 190.0, 5.0));
        let resolved = gw.get_quotes_sourced(&["AAPL", "", "TSLA"]).await;
        assert_eq!(resolved.len(), 2);
        assert!(resolved[0].is_live());
        assert!(!resolved[1].is_live());
        assert_eq!(resolved[1].data().symbol, "TSLA");
    }
}
