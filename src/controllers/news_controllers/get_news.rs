use axum::{extract::State, Json};

use crate::controllers::news_controllers::models::{NewsListResponse, NewsResponse};
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Most articles returned by one listing.
pub const NEWS_LIMIT: usize = 100;

pub async fn get_news(State(state): State<AppState>) -> AppResult<Json<NewsListResponse>> {
    let articles = state.news.latest_news(NEWS_LIMIT).await?;

    Ok(Json(NewsListResponse {
        news: articles.into_iter().map(NewsResponse::from).collect(),
    }))
}
