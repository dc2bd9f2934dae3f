use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::controllers::health;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub mod game_routes;
pub mod news_routes;
pub mod poll_routes;
pub mod quote_routes;
pub mod volunteer_routes;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/api", get(health::api_root))
        .route("/api/", get(health::api_root))
        .nest("/api/news", news_routes::news_routes())
        .nest("/api/polls", poll_routes::poll_routes())
        .nest("/api/quotes", quote_routes::quote_routes())
        .nest("/api/games", game_routes::game_routes())
        .nest("/api/volunteer", volunteer_routes::volunteer_routes())
        .with_state(state)
}

/// `None` allows any origin, without credentials.
pub fn cors_layer(origin: Option<&str>) -> AppResult<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let cors = match origin {
        Some(origin) => {
            let origin = origin.parse::<HeaderValue>().map_err(|_| {
                AppError::ConfigError(format!("Failed to parse CORS origin: {}", origin))
            })?;
            cors.allow_origin(origin)
        }
        None => cors.allow_origin(Any),
    };

    Ok(cors)
}
