use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewsArticle {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title_en: String,
    pub title_hi: String,
    pub summary_en: String,
    pub summary_hi: String,
    pub content_en: String,
    pub content_hi: String,
    pub image_base64: String,
    /// Share of the article's claims that check out, from 0.0 to 1.0.
    pub truth_score: f64,
    pub source: String,
    #[serde(default)]
    pub fact_vs_claim_en: String,
    #[serde(default)]
    pub fact_vs_claim_hi: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}
