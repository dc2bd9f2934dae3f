pub mod models;
pub mod submit_score;
