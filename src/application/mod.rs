pub mod articles;
pub mod chart;
pub mod credentials;
pub mod fallback;
pub mod gateway;
pub mod overview;
pub mod portfolio;
pub mod stock_detail;
