pub mod output;
pub mod risk_log;
pub mod walker;
