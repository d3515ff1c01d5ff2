use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "marketpulse", about = "Market dashboard data: quotes, news, indices, portfolio")]
pub struct Cli {
    /// Human-readable output instead of JSON
    #[arg(long, global = true)]
    pub plain: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quotes for one or more symbols (default: the watchlist)
    Quote {
        symbols: Vec<String>,
    },
    /// Current price and performance windows for one symbol
    Stock {
        symbol: String,
    },
    /// Market news headlines
    News {
        /// Provider topic (default: financial_markets)
        #[arg(long)]
        topic: Option<String>,
    },
    /// Full text of a news article
    Article {
        id: String,
    },
    /// Headline indices (S&P 500, Dow Jones, NASDAQ, VIX)
    Overview,
    /// Portfolio summary for the default holdings
    Portfolio,
    /// Intraday price chart points
    Chart {
        #[arg(default_value = "AAPL")]
        symbol: String,
    },
    /// Manage the provider API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Subcommand)]
pub enum KeyAction {
    /// Save an API key (validated with a live quote unless --no-validate)
    Set {
        key: String,
        #[arg(long)]
        no_validate: bool,
    },
    /// Show the stored key (masked)
    Show,
    /// Remove the stored key
    Clear,
}

/// `abcd••••wxyz` for keys longer than eight chars, all dots otherwise.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "•".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}••••{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("ABCDEFGHIJKL"), "ABCD••••IJKL");
        assert_eq!(mask_key("short"), "•••••");
        assert_eq!(mask_key(""), "");
    }

    #[test]
    fn test_parse_key_set() {
        let cli = Cli::try_parse_from(["marketpulse", "key", "set", "demo", "--no-validate"]).unwrap();
        match cli.command {
            Commands::Key {
                action: KeyAction::Set { key, no_validate },
            } => {
                assert_eq!(key, "demo");
                assert!(no_validate);
            }
            _ => panic!("expected key set"),
        }
    }

    #[test]
    fn test_parse_quote_symbols() {
        let cli = Cli::try_parse_from(["marketpulse", "--plain", "quote", "AAPL", "TSLA"]).unwrap();
        assert!(cli.plain);
        match cli.command {
            Commands::Quote { symbols } => assert_eq!(symbols, vec!["AAPL", "TSLA"]),
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn test_parse_stock_and_article() {
        let cli = Cli::try_parse_from(["marketpulse", "stock", "nvda"]).unwrap();
        assert!(matches!(cli.command, Commands::Stock { symbol } if symbol == "nvda"));

        let cli = Cli::try_parse_from(["marketpulse", "article", "2", "--plain"]).unwrap();
        assert!(cli.plain);
        assert!(matches!(cli.command, Commands::Article { id } if id == "2"));

        assert!(Cli::try_parse_from(["marketpulse", "stock"]).is_err());
    }
}
