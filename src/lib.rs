pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::articles::ArticleUseCase;
use crate::application::chart::ChartUseCase;
use crate::application::credentials::ApiKeyUseCase;
use crate::application::gateway::{GatewayConfig, MarketDataGateway, Sourced};
use crate::application::overview::MarketOverviewUseCase;
use crate::application::portfolio::PortfolioUseCase;
use crate::application::stock_detail::StockDetailUseCase;
use crate::config::{Settings, SourceKind};
use crate::domain::entities::article_detail::ArticleDetail;
use crate::domain::entities::chart::ChartSeries;
use crate::domain::entities::market_index::MarketIndex;
use crate::domain::entities::news_article::NewsArticle;
use crate::domain::entities::portfolio::{Holding, PortfolioSummary};
use crate::domain::entities::quote::Quote;
use crate::domain::entities::stock_detail::StockDetail;
use crate::domain::error::DomainError;
use crate::domain::ports::credential_store::CredentialStore;
use crate::domain::ports::market_data_source::MarketDataSource;
use crate::infrastructure::alpha_vantage::AlphaVantageSource;
use crate::infrastructure::offline::OfflineSource;
use crate::infrastructure::sqlite::credential_store::SqliteCredentialStore;
use crate::infrastructure::sqlite::migrations::run_migrations;
use chrono::Utc;
use log::warn;
use rusqlite::Connection;
use std::sync::Arc;

pub struct MarketPulse {
    source: Arc<dyn MarketDataSource>,
    store: Arc<dyn CredentialStore>,
    base_config: GatewayConfig,
    api_key_override: Option<String>,
    api_key_uc: ApiKeyUseCase,
    overview_uc: MarketOverviewUseCase,
    chart_uc: ChartUseCase,
    article_uc: ArticleUseCase,
}

impl MarketPulse {
    pub fn new(settings: &Settings) -> Result<Self, DomainError> {
        let source: Arc<dyn MarketDataSource> = match settings.source {
            SourceKind::AlphaVantage => {
                Arc::new(AlphaVantageSource::new(Some(settings.api_url.clone())))
            }
            SourceKind::Offline => Arc::new(OfflineSource),
        };

        let config = GatewayConfig {
            api_key: None,
            news_topic: settings.news_topic.clone(),
            news_limit: settings.news_limit,
        };
        Self::build(
            &settings.db_path,
            source,
            config,
            settings.api_key_override.clone(),
        )
    }

    pub fn with_source(
        db_path: &str,
        source: Arc<dyn MarketDataSource>,
    ) -> Result<Self, DomainError> {
        Self::build(db_path, source, GatewayConfig::default(), None)
    }

    fn build(
        db_path: &str,
        source: Arc<dyn MarketDataSource>,
        base_config: GatewayConfig,
        api_key_override: Option<String>,
    ) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)?;
        run_migrations(&conn)?;
        let store: Arc<dyn CredentialStore> = Arc::new(SqliteCredentialStore::new(conn));

        Ok(Self {
            api_key_uc: ApiKeyUseCase::new(store.clone(), source.clone(), base_config.clone()),
            overview_uc: MarketOverviewUseCase,
            chart_uc: ChartUseCase,
            article_uc: ArticleUseCase,
            source,
            store,
            base_config,
            api_key_override,
        })
    }

    /// A gateway carrying the current key. The key is read once here; a key
    /// saved later is picked up by the next call.
    pub fn gateway(&self) -> MarketDataGateway {
        let api_key = self.api_key_override.clone().or_else(|| {
            self.store.get_api_key().unwrap_or_else(|e| {
                warn!("Could not read stored API key: {e}");
                None
            })
        });
        MarketDataGateway::new(
            self.source.clone(),
            GatewayConfig {
                api_key,
                ..self.base_config.clone()
            },
        )
    }

    // Market data
    pub async fn quote(&self, symbol: &str) -> Option<Quote> {
        self.gateway().get_quote(symbol).await
    }

    pub async fn quote_sourced(&self, symbol: &str) -> Option<Sourced<Quote>> {
        self.gateway().get_quote_sourced(symbol).await
    }

    pub async fn quotes<S: AsRef<str>>(&self, symbols: &[S]) -> Vec<Quote> {
        self.gateway().get_quotes(symbols).await
    }

    pub async fn quotes_sourced<S: AsRef<str>>(&self, symbols: &[S]) -> Vec<Sourced<Quote>> {
        self.gateway().get_quotes_sourced(symbols).await
    }

    pub async fn stock_detail(&self, symbol: &str) -> Option<StockDetail> {
        StockDetailUseCase::new(self.gateway()).detail(symbol).await
    }

    pub async fn news(&self, topic: Option<&str>) -> Vec<NewsArticle> {
        self.gateway().get_news(topic).await
    }

    pub async fn news_sourced(&self, topic: Option<&str>) -> Sourced<Vec<NewsArticle>> {
        self.gateway().get_news_sourced(topic).await
    }

    pub fn news_article(&self, id: &str) -> Option<ArticleDetail> {
        self.article_uc.find(id, Utc::now())
    }

    pub fn market_overview(&self) -> Vec<MarketIndex> {
        self.overview_uc.indices()
    }

    pub async fn portfolio(&self, holdings: &[Holding], cash: f64) -> PortfolioSummary {
        PortfolioUseCase::new(self.gateway())
            .summary(holdings, cash)
            .await
    }

    pub fn chart(&self, symbol: &str) -> Result<ChartSeries, DomainError> {
        self.chart_uc.intraday(symbol)
    }

    // API key
    pub fn save_api_key(&self, key: &str) -> Result<(), DomainError> {
        self.api_key_uc.save(key).map(|_| ())
    }

    pub fn api_key(&self) -> Result<Option<String>, DomainError> {
        self.api_key_uc.get()
    }

    pub fn clear_api_key(&self) -> Result<(), DomainError> {
        self.api_key_uc.clear()
    }

    pub async fn validate_api_key(&self, key: &str) -> Result<(), DomainError> {
        self.api_key_uc.validate(key).await
    }
}
