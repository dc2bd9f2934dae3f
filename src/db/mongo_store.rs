use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::{options::ReturnDocument, Collection, Database};
use tracing::debug;

use crate::db::store::{
    NewsStore, PollStore, QuoteStore, SubmissionStore, GAME_SCORES, NEWS, POLLS, QUOTES,
    VOLUNTEERS,
};
use crate::models::{
    game_models::GameScore,
    news_models::NewsArticle,
    poll_models::{Poll, VoteChoice},
    quote_models::Quote,
    volunteer_models::VolunteerForm,
};
use crate::utils::error::AppResult;

/// MongoDB-backed store. Cloning is cheap; every clone shares the driver's
/// connection pool, and each operation checks a connection out for its own
/// duration only.
#[derive(Clone, Debug)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn polls(&self) -> Collection<Poll> {
        self.db.collection::<Poll>(POLLS)
    }

    fn news(&self) -> Collection<NewsArticle> {
        self.db.collection::<NewsArticle>(NEWS)
    }

    fn quotes(&self) -> Collection<Quote> {
        self.db.collection::<Quote>(QUOTES)
    }
}

#[async_trait]
impl PollStore for MongoStore {
    async fn list_polls(&self) -> AppResult<Vec<Poll>> {
        let cursor = self.polls().find(doc! {}).await?;
        let polls: Vec<Poll> = cursor.try_collect().await?;

        Ok(polls)
    }

    async fn increment_vote(
        &self,
        poll_id: ObjectId,
        choice: VoteChoice,
    ) -> AppResult<Option<Poll>> {
        let mut counter = Document::new();
        counter.insert(choice.field(), 1_i64);

        let poll = self
            .polls()
            .find_one_and_update(doc! { "_id": poll_id }, doc! { "$inc": counter })
            .return_document(ReturnDocument::After)
            .await?;

        debug!(%poll_id, %choice, matched = poll.is_some(), "applied $inc to poll");

        Ok(poll)
    }

    async fn count_polls(&self) -> AppResult<u64> {
        Ok(self.polls().count_documents(doc! {}).await?)
    }

    async fn insert_polls(&self, polls: Vec<Poll>) -> AppResult<()> {
        if polls.is_empty() {
            return Ok(());
        }
        self.polls().insert_many(polls).await?;

        Ok(())
    }
}

#[async_trait]
impl NewsStore for MongoStore {
    async fn latest_news(&self, limit: usize) -> AppResult<Vec<NewsArticle>> {
        let cursor = self
            .news()
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit as i64)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn count_news(&self) -> AppResult<u64> {
        Ok(self.news().count_documents(doc! {}).await?)
    }

    async fn insert_news(&self, articles: Vec<NewsArticle>) -> AppResult<()> {
        if articles.is_empty() {
            return Ok(());
        }
        self.news().insert_many(articles).await?;

        Ok(())
    }
}

#[async_trait]
impl QuoteStore for MongoStore {
    async fn first_quote(&self) -> AppResult<Option<Quote>> {
        Ok(self.quotes().find_one(doc! {}).await?)
    }

    async fn count_quotes(&self) -> AppResult<u64> {
        Ok(self.quotes().count_documents(doc! {}).await?)
    }

    async fn insert_quotes(&self, quotes: Vec<Quote>) -> AppResult<()> {
        if quotes.is_empty() {
            return Ok(());
        }
        self.quotes().insert_many(quotes).await?;

        Ok(())
    }
}

#[async_trait]
impl SubmissionStore for MongoStore {
    async fn insert_game_score(&self, score: &GameScore) -> AppResult<ObjectId> {
        self.db
            .collection::<GameScore>(GAME_SCORES)
            .insert_one(score)
            .await?;

        Ok(score.id)
    }

    async fn insert_volunteer(&self, form: &VolunteerForm) -> AppResult<ObjectId> {
        self.db
            .collection::<VolunteerForm>(VOLUNTEERS)
            .insert_one(form)
            .await?;

        Ok(form.id)
    }
}
