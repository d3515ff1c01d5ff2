use crate::application::gateway::MarketDataGateway;
use crate::domain::entities::portfolio::{Holding, PortfolioSummary};
use log::warn;

pub const DEFAULT_CASH: f64 = 85_870.50;

pub fn default_holdings() -> Vec<Holding> {
    vec![
        Holding::new("AAPL", 50.0),
        Holding::new("GOOGL", 25.0),
        Holding::new("TSLA", 40.0),
        Holding::new("MSFT", 30.0),
    ]
}

pub struct PortfolioUseCase {
    gateway: MarketDataGateway,
}

impl PortfolioUseCase {
    pub fn new(gateway: MarketDataGateway) -> Self {
        Self { gateway }
    }

    pub async fn summary(&self, holdings: &[Holding], cash: f64) -> PortfolioSummary {
        let symbols: Vec<&str> = holdings.iter().map(|h| h.symbol.as_str()).collect();
        let quotes = self.gateway.get_quotes(&symbols).await;
        let (summary, missing) = PortfolioSummary::value(holdings, &quotes, cash);
        for symbol in missing {
            warn!("No quote for holding '{symbol}', leaving it out of the summary");
        }
        summary
    }
}
