use crate::domain::values::sentiment::Sentiment;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub summary: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    /// `None` when there is no external link to follow.
    pub url: Option<String>,
    pub sentiment_score: Option<f64>,
    pub category: Option<String>,
}

impl NewsArticle {
    pub fn sentiment(&self) -> Sentiment {
        Sentiment::from_score(self.sentiment_score)
    }
}

/// Normalize a provider link. Empty strings and the `#` placeholder mean no link.
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "#" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a publication timestamp. Accepts RFC 3339 and the compact
/// `YYYYMMDDTHHMMSS` form (UTC) some providers emit.
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y%m%dT%H%M%S", "%Y%m%dT%H%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
