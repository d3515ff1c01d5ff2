pub mod credential_store;
pub mod migrations;
