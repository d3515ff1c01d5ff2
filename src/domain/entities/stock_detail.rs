use serde::{Deserialize, Serialize};

/// Price change over one lookback window, measured against the price at its start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceWindow {
    /// Short label: `YTD`, `1M`, `1Y`
    pub label: String,
    pub title: String,
    pub change: f64,
    pub change_percent: f64,
}

impl PerformanceWindow {
    /// Window ending at `price` whose start was `percent` lower (or higher).
    /// Percents at or below -100 have no valid start price and yield a zero window.
    pub fn from_percent(label: &str, title: &str, price: f64, percent: f64) -> Self {
        let factor = 1.0 + percent / 100.0;
        let (change, change_percent) = if factor > 0.0 && price.is_finite() {
            (price - price / factor, percent)
        } else {
            (0.0, 0.0)
        };
        Self {
            label: label.to_string(),
            title: title.to_string(),
            change,
            change_percent,
        }
    }

    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockDetail {
    pub symbol: String,
    pub company: String,
    pub current_price: f64,
    pub performance: Vec<PerformanceWindow>,
}
