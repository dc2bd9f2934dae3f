pub mod game_controllers;
pub mod health;
pub mod news_controllers;
pub mod poll_controllers;
pub mod quote_controllers;
pub mod volunteer_controllers;
