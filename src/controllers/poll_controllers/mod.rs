pub mod cast_vote;
pub mod models;
pub mod polls;
