//! Shared test helpers.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use marketpulse::domain::entities::news_article::NewsArticle;
use marketpulse::domain::entities::quote::Quote;
use marketpulse::domain::error::DomainError;
use marketpulse::domain::ports::market_data_source::MarketDataSource;
use marketpulse::domain::values::symbol::Symbol;
use marketpulse::MarketPulse;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

/// Scripted source: answers from a fixed table and records every key it saw.
/// Symbols missing from the table fail with a provider error; news fails
/// unless `with_news` was called. Only `accepted_key` gets data.
#[derive(Default)]
pub struct StubSource {
    pub prices: HashMap<String, (f64, f64)>,
    pub news: Option<Vec<NewsArticle>>,
    pub accepted_key: Option<String>,
    pub calls: AtomicUsize,
    pub seen_keys: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new(accepted_key: &str) -> Self {
        Self {
            accepted_key: Some(accepted_key.to_string()),
            ..Default::default()
        }
    }

    pub fn with_quote(mut self, symbol: &str, price: f64, change: f64) -> Self {
        self.prices.insert(symbol.to_string(), (price, change));
        self
    }

    pub fn with_news(mut self, articles: Vec<NewsArticle>) -> Self {
        self.news = Some(articles);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check_key(&self, api_key: &str) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_keys.lock().unwrap().push(api_key.to_string());
        if self.accepted_key.as_deref() == Some(api_key) {
            Ok(())
        } else {
            Err(DomainError::Provider("Invalid API key".into()))
        }
    }
}

#[async_trait]
impl MarketDataSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_quote(&self, symbol: &Symbol, api_key: &str) -> Result<Quote, DomainError> {
        self.check_key(api_key)?;
        let (price, change) = self
            .prices
            .get(symbol.as_str())
            .copied()
            .ok_or_else(|| DomainError::Provider(format!("Unknown symbol {symbol}")))?;
        Ok(Quote::with_change(
            symbol.to_string(),
            String::new(),
            price,
            change,
        ))
    }

    async fn fetch_news(
        &self,
        _topic: &str,
        _limit: usize,
        api_key: &str,
    ) -> Result<Vec<NewsArticle>, DomainError> {
        self.check_key(api_key)?;
        self.news
            .clone()
            .ok_or_else(|| DomainError::Network("connection refused".into()))
    }
}

/// Answers every quote live, but the n-th symbol of `order` sleeps longer
/// than the (n+1)-th, so earlier symbols complete last. Tracks how many
/// lookups were running at the same time.
pub struct DelayedSource {
    order: Vec<String>,
    step_ms: u64,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl DelayedSource {
    pub fn new(order: &[&str], step_ms: u64) -> Self {
        Self {
            order: order.iter().map(|s| s.to_uppercase()).collect(),
            step_ms,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketDataSource for DelayedSource {
    fn name(&self) -> &str {
        "delayed"
    }

    async fn fetch_quote(&self, symbol: &Symbol, _api_key: &str) -> Result<Quote, DomainError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let pos = self
            .order
            .iter()
            .position(|s| s == symbol.as_str())
            .unwrap_or(self.order.len());
        let delay = (self.order.len() - pos) as u64 * self.step_ms;
        tokio::time::sleep(StdDuration::from_millis(delay)).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(Quote::with_change(
            symbol.to_string(),
            String::new(),
            50.0 + pos as f64,
            1.0,
        ))
    }

    async fn fetch_news(
        &self,
        _topic: &str,
        _limit: usize,
        _api_key: &str,
    ) -> Result<Vec<NewsArticle>, DomainError> {
        Err(DomainError::Network("no news here".into()))
    }
}

pub fn setup(source: Arc<dyn MarketDataSource>) -> MarketPulse {
    MarketPulse::with_source(":memory:", source).unwrap()
}

pub fn article(title: &str, hours_ago: i64, score: Option<f64>) -> NewsArticle {
    NewsArticle {
        title: title.to_string(),
        summary: format!("{title} summary"),
        source: "Wire".to_string(),
        published_at: Utc::now() - Duration::hours(hours_ago),
        url: Some(format!("https://news.example/{hours_ago}")),
        sentiment_score: score,
        category: None,
    }
}
