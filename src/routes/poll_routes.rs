use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::poll_controllers::{cast_vote, polls};
use crate::state::AppState;

pub fn poll_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(polls::get_all_polls))
        .route("/:poll_id/vote", post(cast_vote::cast_vote))
}
