pub mod alpha_vantage;
pub mod offline;
pub mod sqlite;
