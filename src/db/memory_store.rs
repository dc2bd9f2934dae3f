use async_trait::async_trait;
use bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::db::store::{NewsStore, PollStore, QuoteStore, SubmissionStore};
use crate::models::{
    game_models::GameScore,
    news_models::NewsArticle,
    poll_models::{Poll, VoteChoice},
    quote_models::Quote,
    volunteer_models::VolunteerForm,
};
use crate::utils::error::AppResult;

/// In-process store used by tests and by `STORE_BACKEND=memory`.
///
/// Collections keep insertion order. A vote increments under one write-lock
/// acquisition, which is this backend's atomic increment.
#[derive(Debug, Default)]
pub struct MemoryStore {
    polls: RwLock<Vec<Poll>>,
    news: RwLock<Vec<NewsArticle>>,
    quotes: RwLock<Vec<Quote>>,
    game_scores: RwLock<Vec<GameScore>>,
    volunteers: RwLock<Vec<VolunteerForm>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn game_scores(&self) -> Vec<GameScore> {
        self.game_scores.read().await.clone()
    }

    pub async fn volunteers(&self) -> Vec<VolunteerForm> {
        self.volunteers.read().await.clone()
    }
}

#[async_trait]
impl PollStore for MemoryStore {
    async fn list_polls(&self) -> AppResult<Vec<Poll>> {
        Ok(self.polls.read().await.clone())
    }

    async fn increment_vote(
        &self,
        poll_id: ObjectId,
        choice: VoteChoice,
    ) -> AppResult<Option<Poll>> {
        let mut polls = self.polls.write().await;

        let Some(poll) = polls.iter_mut().find(|poll| poll.id == poll_id) else {
            return Ok(None);
        };

        match choice {
            VoteChoice::Yes => poll.yes += 1,
            VoteChoice::No => poll.no += 1,
        }

        Ok(Some(poll.clone()))
    }

    async fn count_polls(&self) -> AppResult<u64> {
        Ok(self.polls.read().await.len() as u64)
    }

    async fn insert_polls(&self, polls: Vec<Poll>) -> AppResult<()> {
        self.polls.write().await.extend(polls);
        Ok(())
    }
}

#[async_trait]
impl NewsStore for MemoryStore {
    async fn latest_news(&self, limit: usize) -> AppResult<Vec<NewsArticle>> {
        let mut news = self.news.read().await.clone();
        news.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        news.truncate(limit);

        Ok(news)
    }

    async fn count_news(&self) -> AppResult<u64> {
        Ok(self.news.read().await.len() as u64)
    }

    async fn insert_news(&self, articles: Vec<NewsArticle>) -> AppResult<()> {
        self.news.write().await.extend(articles);
        Ok(())
    }
}

#[async_trait]
impl QuoteStore for MemoryStore {
    async fn first_quote(&self) -> AppResult<Option<Quote>> {
        Ok(self.quotes.read().await.first().cloned())
    }

    async fn count_quotes(&self) -> AppResult<u64> {
        Ok(self.quotes.read().await.len() as u64)
    }

    async fn insert_quotes(&self, quotes: Vec<Quote>) -> AppResult<()> {
        self.quotes.write().await.extend(quotes);
        Ok(())
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn insert_game_score(&self, score: &GameScore) -> AppResult<ObjectId> {
        self.game_scores.write().await.push(score.clone());
        Ok(score.id)
    }

    async fn insert_volunteer(&self, form: &VolunteerForm) -> AppResult<ObjectId> {
        self.volunteers.write().await.push(form.clone());
        Ok(form.id)
    }
}
