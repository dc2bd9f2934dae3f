use axum::{routing::get, Router};

use crate::controllers::news_controllers::get_news;
use crate::state::AppState;

pub fn news_routes() -> Router<AppState> {
    Router::new().route("/", get(get_news::get_news))
}
