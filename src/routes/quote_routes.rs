use axum::{routing::get, Router};

use crate::controllers::quote_controllers::today_quote;
use crate::state::AppState;

pub fn quote_routes() -> Router<AppState> {
    Router::new().route("/today", get(today_quote::get_today_quote))
}
