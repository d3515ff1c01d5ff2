use crate::application::fallback;
use crate::domain::entities::market_index::MarketIndex;

/// Headline index strip (S&P 500, Dow Jones, NASDAQ, VIX).
///
/// There is no live feed for indices; levels move up to ±2% around fixed bases
/// on every call.
pub struct MarketOverviewUseCase;

impl MarketOverviewUseCase {
    pub fn indices(&self) -> Vec<MarketIndex> {
        let mut rng = rand::rng();
        fallback::synthesize_indices(&mut rng)
    }
}
