pub mod get_news;
pub mod models;
