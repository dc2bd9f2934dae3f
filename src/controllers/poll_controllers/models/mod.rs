use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::poll_models::Poll;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PollResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub question_en: String,
    pub question_hi: String,
    pub yes: i64,
    pub no: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Poll> for PollResponse {
    fn from(poll: Poll) -> Self {
        Self {
            id: poll.id.to_hex(),
            question_en: poll.question_en,
            question_hi: poll.question_hi,
            yes: poll.yes,
            no: poll.no,
            created_at: poll.created_at,
        }
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct PollListResponse {
    pub polls: Vec<PollResponse>,
}

/// The vote stays a raw string here so an unknown choice is reported as a bad
/// request by the service instead of a body rejection.
#[derive(Deserialize, Serialize, Debug)]
pub struct CastVoteRequest {
    pub vote: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CastVoteResponse {
    pub success: bool,
    pub poll: PollResponse,
}
