pub mod display;
pub mod sentiment;
pub mod symbol;
