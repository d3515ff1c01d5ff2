use crate::application::gateway::{DEFAULT_NEWS_LIMIT, DEFAULT_NEWS_TOPIC};
use crate::infrastructure::alpha_vantage::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    AlphaVantage,
    Offline,
}

/// Runtime settings, read from `MARKETPULSE_*` environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    pub db_path: String,
    pub source: SourceKind,
    pub api_url: String,
    /// Takes precedence over the stored key when set.
    pub api_key_override: Option<String>,
    pub news_topic: String,
    pub news_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: "./marketpulse.db".into(),
            source: SourceKind::AlphaVantage,
            api_url: DEFAULT_BASE_URL.into(),
            api_key_override: None,
            news_topic: DEFAULT_NEWS_TOPIC.into(),
            news_limit: DEFAULT_NEWS_LIMIT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Settings::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let source = match var("MARKETPULSE_SOURCE").as_deref().map(str::to_lowercase) {
            Some(s) if s == "offline" => SourceKind::Offline,
            _ => SourceKind::AlphaVantage,
        };

        Self {
            db_path: var("MARKETPULSE_DB").unwrap_or(defaults.db_path),
            source,
            api_url: var("MARKETPULSE_API_URL").unwrap_or(defaults.api_url),
            api_key_override: var("MARKETPULSE_API_KEY"),
            news_topic: var("MARKETPULSE_NEWS_TOPIC").unwrap_or(defaults.news_topic),
            news_limit: var("MARKETPULSE_NEWS_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.news_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let s = settings(&[]);
        assert_eq!(s.db_path, "./marketpulse.db");
        assert_eq!(s.source, SourceKind::AlphaVantage);
        assert_eq!(s.news_topic, "financial_markets");
        assert_eq!(s.news_limit, 10);
        assert!(s.api_key_override.is_none());
    }

    #[test]
    fn test_overrides() {
        let s = settings(&[
            ("MARKETPULSE_SOURCE", "Offline"),
            ("MARKETPULSE_API_KEY", "demo"),
            ("MARKETPULSE_NEWS_LIMIT", "3"),
            ("MARKETPULSE_DB", ":memory:"),
        ]);
        assert_eq!(s.source, SourceKind::Offline);
        assert_eq!(s.api_key_override.as_deref(), Some("demo"));
        assert_eq!(s.news_limit, 3);
        assert_eq!(s.db_path, ":memory:");
    }

    #[test]
    fn test_bad_limit_and_blank_key_ignored() {
        let s = settings(&[("MARKETPULSE_NEWS_LIMIT", "0"), ("MARKETPULSE_API_KEY", "  ")]);
        assert_eq!(s.news_limit, 10);
        assert!(s.api_key_override.is_none());
    }
}
