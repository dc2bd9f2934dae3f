use axum::{extract::State, Json};

use crate::controllers::poll_controllers::models::{PollListResponse, PollResponse};
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_all_polls(State(state): State<AppState>) -> AppResult<Json<PollListResponse>> {
    let polls = state.polls.list_polls().await?;

    let poll_responses: Vec<PollResponse> = polls.into_iter().map(PollResponse::from).collect();

    Ok(Json(PollListResponse {
        polls: poll_responses,
    }))
}
