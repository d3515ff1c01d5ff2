pub mod article_detail;
pub mod chart;
pub mod market_index;
pub mod news_article;
pub mod portfolio;
pub mod quote;
pub mod stock_detail;
