use serde::{Deserialize, Serialize};

/// Padding applied above and below the data range when sizing the y-axis.
pub const DOMAIN_PADDING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

impl ChartSeries {
    /// `(min - 5, max + 5)`, or `None` for an empty series.
    pub fn y_domain(&self) -> Option<(f64, f64)> {
        let mut prices = self.points.iter().map(|p| p.price);
        let first = prices.next()?;
        let (lo, hi) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some((lo - DOMAIN_PADDING, hi + DOMAIN_PADDING))
    }

    /// Last price minus first price.
    pub fn change(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => b.price - a.price,
            _ => 0.0,
        }
    }
}
