use chrono::Utc;
use clap::Parser;
use marketpulse::application::fallback::known_symbols;
use marketpulse::application::gateway::Sourced;
use marketpulse::application::portfolio::{default_holdings, DEFAULT_CASH};
use marketpulse::cli::commands::{mask_key, Cli, Commands, KeyAction};
use marketpulse::config::Settings;
use marketpulse::domain::values::display::{
    currency, relative_time, signed_currency, signed_percent,
};
use marketpulse::MarketPulse;

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let settings = Settings::from_env();

    let mp = match MarketPulse::new(&settings) {
        Ok(mp) => mp,
        Err(e) => {
            eprintln!("Error initializing MarketPulse: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(mp, cli.command, cli.plain).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn origin_label<T>(sourced: &Sourced<T>) -> &'static str {
    if sourced.is_live() {
        "live"
    } else {
        "fallback"
    }
}

async fn run_command(
    mp: MarketPulse,
    cmd: Commands,
    plain: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Quote { symbols } => {
            let symbols: Vec<String> = if symbols.is_empty() {
                known_symbols().into_iter().map(String::from).collect()
            } else {
                symbols
            };
            if plain {
                let resolved = mp.quotes_sourced(&symbols).await;
                if resolved.len() < symbols.len() {
                    eprintln!("Skipped {} invalid symbol(s)", symbols.len() - resolved.len());
                }
                for sourced in resolved {
                    let label = origin_label(&sourced);
                    let q = sourced.into_inner();
                    println!(
                        "{:<6} {:<18} {:>12} {:>9} ({}) [{label}]",
                        q.symbol,
                        q.company,
                        currency(q.price),
                        signed_currency(q.change),
                        signed_percent(q.change_percent),
                    );
                }
            } else {
                let quotes = mp.quotes(&symbols).await;
                println!("{}", serde_json::to_string_pretty(&quotes)?);
            }
        }
        Commands::Stock { symbol } => {
            let detail = mp
                .stock_detail(&symbol)
                .await
                .ok_or_else(|| format!("Invalid symbol: {symbol}"))?;
            if plain {
                println!("{} {}", detail.symbol, detail.company);
                println!("Current price {}", currency(detail.current_price));
                for w in &detail.performance {
                    println!(
                        "  {:<14} {:>10} ({})",
                        w.title,
                        signed_currency(w.change),
                        signed_percent(w.change_percent),
                    );
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            }
        }
        Commands::Article { id } => {
            let article = mp
                .news_article(&id)
                .ok_or_else(|| format!("Article not found: {id}"))?;
            if plain {
                println!("{}", article.title);
                println!(
                    "{} | {} | {} | By {} | {} min read",
                    article.category,
                    article.impact,
                    article.source,
                    article.author,
                    article.read_time_minutes(),
                );
                println!("{}", relative_time(&article.published_at, &Utc::now()));
                for paragraph in article.paragraphs() {
                    println!();
                    println!("{paragraph}");
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&article)?);
            }
        }
        Commands::News { topic } => {
            let resolved = mp.news_sourced(topic.as_deref()).await;
            if plain {
                let label = origin_label(&resolved);
                let now = Utc::now();
                for article in resolved.data() {
                    println!("{} [{}]", article.title, article.sentiment());
                    println!(
                        "  {} | {} | {}",
                        article.source,
                        relative_time(&article.published_at, &now),
                        article.url.as_deref().unwrap_or("no link"),
                    );
                }
                println!("({label} data)");
            } else {
                println!("{}", serde_json::to_string_pretty(resolved.data())?);
            }
        }
        Commands::Overview => {
            let indices = mp.market_overview();
            if plain {
                for idx in &indices {
                    println!(
                        "{:<10} {:>14} {:>10} ({})",
                        idx.name,
                        currency(idx.value).trim_start_matches('$'),
                        signed_currency(idx.change).replacen('$', "", 1),
                        signed_percent(idx.change_percent),
                    );
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&indices)?);
            }
        }
        Commands::Portfolio => {
            let summary = mp.portfolio(&default_holdings(), DEFAULT_CASH).await;
            if plain {
                println!(
                    "Total {} ({} / {})",
                    currency(summary.total_value),
                    signed_currency(summary.day_change),
                    signed_percent(summary.day_change_percent),
                );
                for p in &summary.positions {
                    println!(
                        "  {:<6} {:>6} sh {:>12} {:>6.1}%",
                        p.symbol,
                        p.shares,
                        currency(p.value),
                        p.allocation_percent,
                    );
                }
                println!("  Cash   {}", currency(summary.cash));
            } else {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
        Commands::Chart { symbol } => {
            let series = mp.chart(&symbol)?;
            if plain {
                for point in &series.points {
                    println!("{} {:.2}", point.time, point.price);
                }
                if let Some((lo, hi)) = series.y_domain() {
                    println!("range {lo:.2}..{hi:.2}, change {}", signed_currency(series.change()));
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&series)?);
            }
        }
        Commands::Key { action } => match action {
            KeyAction::Set { key, no_validate } => {
                if no_validate {
                    mp.save_api_key(&key)?;
                    println!("API key saved");
                } else {
                    mp.validate_api_key(&key).await?;
                    println!("API key validated and saved");
                }
            }
            KeyAction::Show => match mp.api_key()? {
                Some(key) => println!("{}", mask_key(&key)),
                None => println!("No API key stored"),
            },
            KeyAction::Clear => {
                mp.clear_api_key()?;
                println!("API key cleared");
            }
        },
    }
    Ok(())
}
