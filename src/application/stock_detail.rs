use crate::application::gateway::MarketDataGateway;
use crate::domain::entities::stock_detail::{PerformanceWindow, StockDetail};

/// Lookback windows shown on the detail page: label, title, percent move.
const WINDOWS: [(&str, &str, f64); 3] = [
    ("YTD", "Year to Date", 9.23),
    ("1M", "1 Month", -1.27),
    ("1Y", "1 Year", 18.75),
];

pub struct StockDetailUseCase {
    gateway: MarketDataGateway,
}

impl StockDetailUseCase {
    pub fn new(gateway: MarketDataGateway) -> Self {
        Self { gateway }
    }

    /// Current quote plus performance windows, or `None` for an invalid ticker.
    /// Window percents are fixed; their dollar change follows the current price.
    pub async fn detail(&self, symbol: &str) -> Option<StockDetail> {
        let quote = self.gateway.get_quote(symbol).await?;
        let performance = WINDOWS
            .iter()
            .map(|(label, title, pct)| PerformanceWindow::from_percent(label, title, quote.price, *pct))
            .collect();
        Some(StockDetail {
            symbol: quote.symbol,
            company: quote.company,
            current_price: quote.price,
            performance,
        })
    }
}
