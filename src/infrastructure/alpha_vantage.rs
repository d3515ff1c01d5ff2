use crate::domain::entities::news_article::{normalize_url, parse_published, NewsArticle};
use crate::domain::entities::quote::Quote;
use crate::domain::error::DomainError;
use crate::domain::ports::market_data_source::MarketDataSource;
use crate::domain::values::symbol::Symbol;
use async_trait::async_trait;
use log::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage quote + news-sentiment source (GLOBAL_QUOTE, NEWS_SENTIMENT).
pub struct AlphaVantageSource {
    base_url: String,
    client: reqwest::Client,
}

impl AlphaVantageSource {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::builder()
                .user_agent("MarketPulse/0.1")
                .build()
                .unwrap_or_default(),
        }
    }

    async fn get(&self, query: &[(&str, &str)]) -> Result<String, DomainError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(query)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Network(format!(
                "Alpha Vantage returned {}",
                resp.status()
            )));
        }

        resp.text()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))
    }
}

/// Fields the provider sets instead of data when a call is refused.
#[derive(Debug, Default, serde::Deserialize)]
struct ProviderMarkers {
    #[serde(rename = "Error Message", default)]
    error_message: Option<String>,
    /// Rate-limit notice
    #[serde(rename = "Note", default)]
    note: Option<String>,
    #[serde(rename = "Information", default)]
    information: Option<String>,
}

impl ProviderMarkers {
    fn check(&self) -> Result<(), DomainError> {
        match (&self.error_message, &self.note, &self.information) {
            (Some(msg), _, _) | (None, Some(msg), _) | (None, None, Some(msg)) => {
                Err(DomainError::Provider(msg.clone()))
            }
            (None, None, None) => Ok(()),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote", default)]
    global_quote: Option<GlobalQuote>,
    #[serde(flatten)]
    markers: ProviderMarkers,
}

#[derive(Debug, Default, serde::Deserialize)]
struct GlobalQuote {
    #[serde(rename = "01. symbol", default)]
    symbol: Option<String>,
    #[serde(rename = "05. price", default)]
    price: Option<String>,
    #[serde(rename = "08. previous close", default)]
    previous_close: Option<String>,
    #[serde(rename = "09. change", default)]
    change: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct NewsResponse {
    #[serde(default)]
    feed: Option<Vec<FeedItem>>,
    #[serde(flatten)]
    markers: ProviderMarkers,
}

#[derive(Debug, serde::Deserialize)]
struct FeedItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    time_published: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    overall_sentiment_score: Option<f64>,
    #[serde(default)]
    category_within_source: Option<String>,
}

fn parse_number(field: &str, raw: Option<&str>) -> Result<f64, DomainError> {
    let raw = raw.ok_or_else(|| DomainError::Parse(format!("Missing field: {field}")))?;
    let value = raw
        .trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .map_err(|e| DomainError::Parse(format!("Bad {field} '{raw}': {e}")))?;
    if !value.is_finite() {
        return Err(DomainError::Parse(format!("Non-finite {field} '{raw}'")));
    }
    Ok(value)
}

/// Decode a GLOBAL_QUOTE body. `company` is left empty; the gateway resolves it.
pub(crate) fn parse_quote(requested: &Symbol, body: &str) -> Result<Quote, DomainError> {
    let data: GlobalQuoteResponse =
        serde_json::from_str(body).map_err(|e| DomainError::Parse(e.to_string()))?;
    data.markers.check()?;

    let quote = data
        .global_quote
        .ok_or_else(|| DomainError::Parse("No Global Quote in response".into()))?;
    let symbol = quote
        .symbol
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DomainError::Parse(format!("Empty quote for {requested}")))?
        .to_uppercase();

    let price = parse_number("price", quote.price.as_deref())?;
    if price <= 0.0 {
        return Err(DomainError::Parse(format!("Non-positive price for {symbol}")));
    }

    // Prefer the previous close so change and percent come from the same base.
    let change = match quote.previous_close.as_deref() {
        Some(prev) => price - parse_number("previous close", Some(prev))?,
        None => parse_number("change", quote.change.as_deref())?,
    };
    if price - change <= 0.0 {
        return Err(DomainError::Parse(format!(
            "Non-positive previous close for {symbol}"
        )));
    }

    Ok(Quote::with_change(symbol, String::new(), price, change))
}

/// Decode a NEWS_SENTIMENT body. Items with no title or an unreadable
/// timestamp are dropped.
pub(crate) fn parse_news(body: &str) -> Result<Vec<NewsArticle>, DomainError> {
    let data: NewsResponse =
        serde_json::from_str(body).map_err(|e| DomainError::Parse(e.to_string()))?;
    data.markers.check()?;

    let feed = data
        .feed
        .ok_or_else(|| DomainError::Parse("No feed in response".into()))?;

    Ok(feed
        .into_iter()
        .filter_map(|item| {
            if item.title.trim().is_empty() {
                return None;
            }
            let Some(published_at) = parse_published(&item.time_published) else {
                debug!(
                    "Dropping '{}': bad timestamp '{}'",
                    item.title, item.time_published
                );
                return None;
            };
            Some(NewsArticle {
                title: item.title,
                summary: item.summary,
                source: item.source,
                published_at,
                url: normalize_url(&item.url),
                sentiment_score: item.overall_sentiment_score.filter(|s| s.is_finite()),
                category: item.category_within_source.filter(|c| !c.is_empty() && c != "n/a"),
            })
        })
        .collect())
}

#[async_trait]
impl MarketDataSource for AlphaVantageSource {
    fn name(&self) -> &str {
        "alpha_vantage"
    }

    async fn fetch_quote(&self, symbol: &Symbol, api_key: &str) -> Result<Quote, DomainError> {
        let body = self
            .get(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol.as_str()),
                ("apikey", api_key),
            ])
            .await?;
        parse_quote(symbol, &body)
    }

    async fn fetch_news(
        &self,
        topic: &str,
        limit: usize,
        api_key: &str,
    ) -> Result<Vec<NewsArticle>, DomainError> {
        let limit = limit.to_string();
        let body = self
            .get(&[
                ("function", "NEWS_SENTIMENT"),
                ("topics", topic),
                ("limit", limit.as_str()),
                ("apikey", api_key),
            ])
            .await?;
        parse_news(&body)
    }
}
