use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub company: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl Quote {
    /// Build a quote from the latest price and its delta against the previous close.
    /// `change_percent` is derived as `change / (price - change) * 100`, so it always
    /// carries the same sign as `change`.
    pub fn with_change(symbol: String, company: String, price: f64, change: f64) -> Self {
        let previous = price - change;
        let change_percent = if previous > 0.0 {
            change / previous * 100.0
        } else {
            0.0
        };
        Self {
            symbol,
            company,
            price,
            change,
            change_percent,
        }
    }

    pub fn previous_price(&self) -> f64 {
        self.price - self.change
    }

    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_percent_derived_from_previous() {
        let q = Quote::with_change("AAPL".into(), "Apple Inc.".into(), 110.0, 10.0);
        assert!((q.change_percent - 10.0).abs() < 1e-9);
        assert!((q.previous_price() - 100.0).abs() < 1e-9);
        assert!(q.is_up());
    }

    #[test]
    fn test_negative_change() {
        let q = Quote::with_change("GOOGL".into(), "Alphabet Inc.".into(), 125.89, -1.23);
        assert!(q.change_percent < 0.0);
        assert!(!q.is_up());
    }

    #[test]
    fn test_flat_quote() {
        let q = Quote::with_change("X".into(), "X".into(), 100.0, 0.0);
        assert_eq!(q.change_percent, 0.0);
    }
}
