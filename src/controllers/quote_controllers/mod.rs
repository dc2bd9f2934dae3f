pub mod models;
pub mod today_quote;
