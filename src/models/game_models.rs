use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const GUEST_EMAIL: &str = "guest@swadeshi.in";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GameScore {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_email: String,
    pub game_id: String,
    pub score: i64,
    pub xp_earned: i64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}
