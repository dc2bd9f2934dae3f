use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::news_models::NewsArticle;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NewsResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title_en: String,
    pub title_hi: String,
    pub summary_en: String,
    pub summary_hi: String,
    pub content_en: String,
    pub content_hi: String,
    pub image_base64: String,
    pub truth_score: f64,
    pub source: String,
    pub fact_vs_claim_en: String,
    pub fact_vs_claim_hi: String,
    pub created_at: DateTime<Utc>,
}

impl From<NewsArticle> for NewsResponse {
    fn from(article: NewsArticle) -> Self {
        Self {
            id: article.id.to_hex(),
            title_en: article.title_en,
            title_hi: article.title_hi,
            summary_en: article.summary_en,
            summary_hi: article.summary_hi,
            content_en: article.content_en,
            content_hi: article.content_hi,
            image_base64: article.image_base64,
            truth_score: article.truth_score,
            source: article.source,
            fact_vs_claim_en: article.fact_vs_claim_en,
            fact_vs_claim_hi: article.fact_vs_claim_hi,
            created_at: article.created_at,
        }
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct NewsListResponse {
    pub news: Vec<NewsResponse>,
}
