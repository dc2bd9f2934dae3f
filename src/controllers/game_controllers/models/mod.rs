use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct SubmitScoreRequest {
    #[serde(default)]
    pub user_email: Option<String>,
    pub game_id: String,
    pub score: i64,
    pub xp_earned: i64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct SubmitScoreResponse {
    pub success: bool,
    pub id: String,
    pub xp_earned: i64,
}
