use axum::{routing::post, Router};

use crate::controllers::volunteer_controllers::submit_volunteer;
use crate::state::AppState;

pub fn volunteer_routes() -> Router<AppState> {
    Router::new().route("/", post(submit_volunteer::submit_volunteer_form))
}
