use crate::domain::entities::quote::Quote;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub shares: f64,
}

impl Holding {
    pub fn new(symbol: &str, shares: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            shares,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub company: String,
    pub shares: f64,
    pub price: f64,
    pub value: f64,
    pub day_change: f64,
    /// Share of total portfolio value (cash included), in percent.
    pub allocation_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub cash: f64,
    pub day_change: f64,
    pub day_change_percent: f64,
    pub positions: Vec<Position>,
}

impl PortfolioSummary {
    /// Value `holdings` against `quotes`. Holdings without a matching quote are
    /// left out and returned in the second slot.
    pub fn value(holdings: &[Holding], quotes: &[Quote], cash: f64) -> (Self, Vec<String>) {
        let mut positions = Vec::with_capacity(holdings.len());
        let mut missing = Vec::new();

        for h in holdings {
            match quotes
                .iter()
                .find(|q| q.symbol.eq_ignore_ascii_case(&h.symbol))
            {
                Some(q) => positions.push(Position {
                    symbol: q.symbol.clone(),
                    company: q.company.clone(),
                    shares: h.shares,
                    price: q.price,
                    value: h.shares * q.price,
                    day_change: h.shares * q.change,
                    allocation_percent: 0.0,
                }),
                None => missing.push(h.symbol.clone()),
            }
        }

        let invested: f64 = positions.iter().map(|p| p.value).sum();
        let total_value = invested + cash;
        let day_change: f64 = positions.iter().map(|p| p.day_change).sum();
        let previous_total = total_value - day_change;
        let day_change_percent = if previous_total > 0.0 {
            day_change / previous_total * 100.0
        } else {
            0.0
        };

        if total_value > 0.0 {
            for p in &mut positions {
                p.allocation_percent = p.value / total_value * 100.0;
            }
        }

        (
            Self {
                total_value,
                cash,
                day_change,
                day_change_percent,
                positions,
            },
            missing,
        )
    }
}
