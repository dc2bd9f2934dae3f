//! Sample content inserted on startup into collections that are still empty.

use bson::oid::ObjectId;
use chrono::Utc;
use tracing::info;

use crate::db::store::{NewsStore, PollStore, QuoteStore};
use crate::models::{news_models::NewsArticle, poll_models::Poll, quote_models::Quote};
use crate::utils::error::AppResult;

const ECONOMY_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAwIiBoZWlnaHQ9IjI1MCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iNDAwIiBoZWlnaHQ9IjI1MCIgZmlsbD0iI0ZGOTkzMyIvPjx0ZXh0IHg9IjUwJSIgeT0iNTAlIiBmb250LXNpemU9IjI0IiBmaWxsPSJ3aGl0ZSIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZHk9Ii4zZW0iPkVjb25vbXkgR3Jvd3RoPC90ZXh0Pjwvc3ZnPg==";
const DIGITAL_INDIA_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAwIiBoZWlnaHQ9IjI1MCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iNDAwIiBoZWlnaHQ9IjI1MCIgZmlsbD0iIzEzODgwOCIvPjx0ZXh0IHg9IjUwJSIgeT0iNTAlIiBmb250LXNpemU9IjI0IiBmaWxsPSJ3aGl0ZSIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZHk9Ii4zZW0iPkRpZ2l0YWwgSW5kaWE8L3RleHQ+PC9zdmc+";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub news: usize,
    pub polls: usize,
    pub quotes: usize,
}

pub async fn seed_if_empty<S>(store: &S) -> AppResult<SeedReport>
where
    S: PollStore + NewsStore + QuoteStore + ?Sized,
{
    let mut report = SeedReport::default();

    if store.count_news().await? == 0 {
        let news = sample_news();
        report.news = news.len();
        store.insert_news(news).await?;
    }

    if store.count_polls().await? == 0 {
        let polls = sample_polls();
        report.polls = polls.len();
        store.insert_polls(polls).await?;
    }

    if store.count_quotes().await? == 0 {
        let quotes = sample_quotes();
        report.quotes = quotes.len();
        store.insert_quotes(quotes).await?;
    }

    info!(
        news = report.news,
        polls = report.polls,
        quotes = report.quotes,
        "seeded empty collections"
    );

    Ok(report)
}

pub fn sample_news() -> Vec<NewsArticle> {
    let now = Utc::now();

    vec![
        NewsArticle {
            id: ObjectId::new(),
            title_en: "India's GDP Growth Exceeds Expectations".to_string(),
            title_hi: "भारत की GDP वृद्धि अपेक्षाओं से अधिक".to_string(),
            summary_en: "India's economy shows robust growth with GDP increasing by 7.8% in the last quarter.".to_string(),
            summary_hi: "भारत की अर्थव्यवस्था मजबूत वृद्धि दिखाती है, पिछली तिमाही में GDP में 7.8% की वृद्धि हुई।".to_string(),
            content_en: "India's economic growth continues to outpace global expectations, driven by strong domestic consumption and government infrastructure spending. The GDP growth of 7.8% reflects the resilience of the Indian economy.".to_string(),
            content_hi: "भारत की आर्थिक वृद्धि वैश्विक अपेक्षाओं से आगे निकल रही है, जो मजबूत घरेलू खपत और सरकारी बुनियादी ढांचा खर्च द्वारा संचालित है। 7.8% की GDP वृद्धि भारतीय अर्थव्यवस्था की लचीलापन को दर्शाती है।".to_string(),
            image_base64: ECONOMY_IMAGE.to_string(),
            truth_score: 0.92,
            source: "Ministry of Finance".to_string(),
            fact_vs_claim_en: "Fact: GDP grew by 7.8%. This is verified by official government data.".to_string(),
            fact_vs_claim_hi: "तथ्य: GDP में 7.8% की वृद्धि हुई। यह आधिकारिक सरकारी डेटा द्वारा सत्यापित है।".to_string(),
            created_at: now,
        },
        NewsArticle {
            id: ObjectId::new(),
            title_en: "Digital India Initiative Reaches 1 Billion Users".to_string(),
            title_hi: "डिजिटल इंडिया पहल 1 अरब उपयोगकर्ताओं तक पहुंची".to_string(),
            summary_en: "The Digital India program has successfully connected over 1 billion citizens to digital services.".to_string(),
            summary_hi: "डिजिटल इंडिया कार्यक्रम ने सफलतापूर्वक 1 अरब से अधिक नागरिकों को डिजिटल सेवाओं से जोड़ा है।".to_string(),
            content_en: "The Digital India initiative has achieved a major milestone by connecting over 1 billion users to various digital platforms and services, making India one of the most digitally connected nations.".to_string(),
            content_hi: "डिजिटल इंडिया पहल ने विभिन्न डिजिटल प्लेटफार्मों और सेवाओं से 1 अरब से अधिक उपयोगकर्ताओं को जोड़कर एक प्रमुख मील का पत्थर हासिल किया है, जिससे भारत सबसे अधिक डिजिटल रूप से जुड़े देशों में से एक बन गया है।".to_string(),
            image_base64: DIGITAL_INDIA_IMAGE.to_string(),
            truth_score: 0.88,
            source: "Ministry of Electronics and IT".to_string(),
            fact_vs_claim_en: "Fact: Over 1 billion digital transactions recorded. Verified by MEITY reports.".to_string(),
            fact_vs_claim_hi: "तथ्य: 1 अरब से अधिक डिजिटल लेनदेन दर्ज किए गए। MEITY रिपोर्ट द्वारा सत्यापित।".to_string(),
            created_at: now,
        },
    ]
}

pub fn sample_polls() -> Vec<Poll> {
    vec![Poll::new(
        "Should India invest more in renewable energy?",
        "क्या भारत को अक्षय ऊर्जा में अधिक निवेश करना चाहिए?",
    )]
}

pub fn sample_quotes() -> Vec<Quote> {
    vec![Quote {
        id: ObjectId::new(),
        quote_en: "A nation's culture resides in the hearts and souls of its people.".to_string(),
        quote_hi: "एक राष्ट्र की संस्कृति उसके लोगों के दिलों और आत्माओं में निवास करती है।".to_string(),
        author_en: "Mahatma Gandhi".to_string(),
        author_hi: "महात्मा गांधी".to_string(),
        date: Utc::now().format("%Y-%m-%d").to_string(),
    }]
}
