use crate::application::fallback;
use crate::domain::entities::chart::ChartSeries;
use crate::domain::error::DomainError;
use crate::domain::values::symbol::Symbol;

pub struct ChartUseCase;

impl ChartUseCase {
    /// Sample series relabelled for `symbol`. The points are the same for every ticker.
    pub fn intraday(&self, symbol: &str) -> Result<ChartSeries, DomainError> {
        let symbol = Symbol::new(symbol).map_err(DomainError::InvalidInput)?;
        Ok(fallback::sample_intraday(&symbol))
    }
}
