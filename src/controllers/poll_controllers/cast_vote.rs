use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::controllers::poll_controllers::models::{CastVoteRequest, CastVoteResponse};
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn cast_vote(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<CastVoteRequest>, JsonRejection>,
) -> AppResult<Json<CastVoteResponse>> {
    let Json(payload) = payload?;

    let poll = state.polls.cast_vote(&poll_id, &payload.vote).await?;

    Ok(Json(CastVoteResponse {
        success: true,
        poll: poll.into(),
    }))
}
