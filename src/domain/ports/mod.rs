pub mod credential_store;
pub mod market_data_source;
