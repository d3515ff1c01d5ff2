use crate::domain::values::sentiment::Sentiment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const WORDS_PER_MINUTE: usize = 200;

/// Full-text article behind a headline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub id: String,
    pub title: String,
    pub content: String,
    pub source: String,
    pub category: String,
    pub author: String,
    pub impact: Sentiment,
    pub published_at: DateTime<Utc>,
}

impl ArticleDetail {
    /// Paragraphs are separated by blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Minutes at 200 words per minute, rounded up, never below one.
    pub fn read_time_minutes(&self) -> usize {
        let words = self.content.split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE).max(1)
    }
}
