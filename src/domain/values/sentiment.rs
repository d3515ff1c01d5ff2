use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores at or beyond this magnitude lean one way. Matches the provider's
/// "somewhat bullish/bearish" boundary.
pub const SENTIMENT_THRESHOLD: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Bucket an optional score. Missing or NaN scores are neutral.
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            Some(s) if s >= SENTIMENT_THRESHOLD => Sentiment::Positive,
            Some(s) if s <= -SENTIMENT_THRESHOLD => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}
