//! Local stand-ins for live market data.
//!
//! Everything here is used when no API key is configured or the provider call
//! fails: quotes are jittered around fixed base prices, the index strip is
//! jittered the same way, and news comes from a hand-written list.

use crate::domain::entities::chart::{ChartSeries, PricePoint};
use crate::domain::entities::market_index::MarketIndex;
use crate::domain::entities::news_article::NewsArticle;
use crate::domain::entities::quote::Quote;
use crate::domain::values::symbol::Symbol;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Max relative move applied to a base price when synthesizing a quote.
pub const QUOTE_VARIATION: f64 = 0.05;
/// Max relative move applied to an index level.
pub const INDEX_VARIATION: f64 = 0.02;
/// Synthesized prices never go below this.
pub const PRICE_FLOOR: f64 = 0.01;
/// Flat price reported for symbols with no base price.
pub const PLACEHOLDER_PRICE: f64 = 100.0;
/// Gap between consecutive fallback headlines.
pub const NEWS_INTERVAL_HOURS: i64 = 2;

/// (symbol, company, base price)
const KNOWN_STOCKS: &[(&str, &str, f64)] = &[
    ("AAPL", "Apple Inc.", 182.52),
    ("GOOGL", "Alphabet Inc.", 125.89),
    ("TSLA", "Tesla Inc.", 248.42),
    ("MSFT", "Microsoft Corp.", 378.85),
    ("AMZN", "Amazon.com Inc.", 127.74),
    ("NVDA", "NVIDIA Corp.", 891.25),
];

/// (name, symbol, base level)
const INDICES: &[(&str, &str, f64)] = &[
    ("S&P 500", "SPX", 6502.08),
    ("Dow Jones", "DJI", 41563.08),
    ("NASDAQ", "IXIC", 17713.62),
    ("VIX", "VIX", 16.85),
];

const SAMPLE_INTRADAY: &[(&str, f64)] = &[
    ("09:30", 150.0),
    ("10:00", 155.0),
    ("10:30", 148.0),
    ("11:00", 162.0),
    ("11:30", 158.0),
    ("12:00", 165.0),
    ("12:30", 170.0),
    ("13:00", 168.0),
    ("13:30", 175.0),
    ("14:00", 172.0),
    ("14:30", 178.0),
    ("15:00", 182.0),
];

/// Symbols with a recorded base price, in watchlist order.
pub fn known_symbols() -> Vec<&'static str> {
    KNOWN_STOCKS.iter().map(|(s, _, _)| *s).collect()
}

pub fn company_name(symbol: &str) -> Option<&'static str> {
    KNOWN_STOCKS
        .iter()
        .find(|(s, _, _)| s.eq_ignore_ascii_case(symbol))
        .map(|(_, name, _)| *name)
}

pub fn base_price(symbol: &str) -> Option<f64> {
    KNOWN_STOCKS
        .iter()
        .find(|(s, _, _)| s.eq_ignore_ascii_case(symbol))
        .map(|(_, _, price)| *price)
}

/// Jitter `base` by a uniform factor in `[-variation, +variation]`, floored at
/// [`PRICE_FLOOR`]. Returns `(price, change)`.
fn perturb<R: Rng + ?Sized>(base: f64, variation: f64, rng: &mut R) -> (f64, f64) {
    let factor: f64 = rng.random_range(-variation..=variation);
    let price = (base * (1.0 + factor)).max(PRICE_FLOOR);
    (price, price - base)
}

/// A plausible quote for `symbol`. Known symbols move within ±5% of their
/// base price; anything else is a flat placeholder.
pub fn synthesize_quote<R: Rng + ?Sized>(symbol: &Symbol, rng: &mut R) -> Quote {
    let ticker = symbol.as_str();
    match (base_price(ticker), company_name(ticker)) {
        (Some(base), Some(company)) => {
            let (price, change) = perturb(base, QUOTE_VARIATION, rng);
            Quote::with_change(ticker.to_string(), company.to_string(), price, change)
        }
        _ => Quote::with_change(
            ticker.to_string(),
            ticker.to_string(),
            PLACEHOLDER_PRICE,
            0.0,
        ),
    }
}

pub fn synthesize_indices<R: Rng + ?Sized>(rng: &mut R) -> Vec<MarketIndex> {
    INDICES
        .iter()
        .map(|(name, symbol, base)| {
            let (value, change) = perturb(*base, INDEX_VARIATION, rng);
            MarketIndex {
                name: name.to_string(),
                symbol: symbol.to_string(),
                value,
                change,
                change_percent: change / base * 100.0,
            }
        })
        .collect()
}

/// Canned headlines, newest first, each [`NEWS_INTERVAL_HOURS`] older than the last.
pub fn fallback_news(now: DateTime<Utc>) -> Vec<NewsArticle> {
    let items: [(&str, &str, &str, &str, f64); 4] = [
        (
            "Apple Reports Strong Q4 Earnings, Beats Expectations",
            "Apple Inc. reported quarterly earnings that exceeded analyst expectations, driven by strong iPhone sales...",
            "MarketWatch",
            "Earnings",
            0.42,
        ),
        (
            "Federal Reserve Signals Potential Rate Cuts",
            "Fed officials hint at possible interest rate adjustments in response to economic indicators...",
            "Reuters",
            "Policy",
            0.04,
        ),
        (
            "Tesla Stock Surges on Autonomous Vehicle News",
            "Tesla shares climb after announcing breakthrough in self-driving technology development...",
            "Bloomberg",
            "Technology",
            0.37,
        ),
        (
            "Oil Prices Drop Amid Global Supply Concerns",
            "Crude oil futures decline as geopolitical tensions ease and supply chain issues resolve...",
            "Financial Times",
            "Commodities",
            -0.29,
        ),
    ];

    items
        .iter()
        .enumerate()
        .map(|(i, (title, summary, source, category, score))| NewsArticle {
            title: title.to_string(),
            summary: summary.to_string(),
            source: source.to_string(),
            published_at: now - Duration::hours(NEWS_INTERVAL_HOURS * (i as i64 + 1)),
            url: None,
            sentiment_score: Some(*score),
            category: Some(category.to_string()),
        })
        .collect()
}

pub fn sample_intraday(symbol: &Symbol) -> ChartSeries {
    ChartSeries {
        symbol: symbol.to_string(),
        points: SAMPLE_INTRADAY
            .iter()
            .map(|(time, price)| PricePoint {
                time: time.to_string(),
                price: *price,
            })
            .collect(),
    }
}
