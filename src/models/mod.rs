pub mod game_models;
pub mod news_models;
pub mod poll_models;
pub mod quote_models;
pub mod volunteer_models;
