use axum::{routing::post, Router};

use crate::controllers::game_controllers::submit_score;
use crate::state::AppState;

pub fn game_routes() -> Router<AppState> {
    Router::new().route("/score", post(submit_score::submit_game_score))
}
