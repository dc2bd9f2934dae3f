use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use bson::oid::ObjectId;
use chrono::Utc;
use tracing::info;

use crate::controllers::game_controllers::models::{SubmitScoreRequest, SubmitScoreResponse};
use crate::models::game_models::{GameScore, GUEST_EMAIL};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn submit_game_score(
    State(state): State<AppState>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> AppResult<Json<SubmitScoreResponse>> {
    let Json(body) = payload?;

    if body.game_id.trim().is_empty() {
        return Err(AppError::ValidationError("game_id is required".to_string()));
    }

    if body.score < 0 || body.xp_earned < 0 {
        return Err(AppError::ValidationError(
            "score and xp_earned must not be negative".to_string(),
        ));
    }

    let user_email = body
        .user_email
        .map(|email| email.trim().to_string())
        .filter(|email| !email.is_empty())
        .unwrap_or_else(|| GUEST_EMAIL.to_string());

    let score = GameScore {
        id: ObjectId::new(),
        user_email,
        game_id: body.game_id,
        score: body.score,
        xp_earned: body.xp_earned,
        created_at: Utc::now(),
    };

    let id = state.submissions.insert_game_score(&score).await?;

    info!(%id, game_id = %score.game_id, score = score.score, "game score saved");

    Ok(Json(SubmitScoreResponse {
        success: true,
        id: id.to_hex(),
        xp_earned: score.xp_earned,
    }))
}
