//! Storage interfaces for each collection the API touches.
//!
//! Services and controllers only see these traits. `MongoStore` backs them in
//! production and `MemoryStore` backs them in tests and local runs, so either
//! can be injected into [`AppState`](crate::state::AppState) at startup.

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::models::{
    game_models::GameScore,
    news_models::NewsArticle,
    poll_models::{Poll, VoteChoice},
    quote_models::Quote,
    volunteer_models::VolunteerForm,
};
use crate::utils::error::AppResult;

pub const POLLS: &str = "polls";
pub const NEWS: &str = "news";
pub const QUOTES: &str = "quotes";
pub const GAME_SCORES: &str = "game_scores";
pub const VOLUNTEERS: &str = "volunteers";

#[async_trait]
pub trait PollStore: Send + Sync {
    /// All polls in the store's natural order.
    async fn list_polls(&self) -> AppResult<Vec<Poll>>;

    /// Adds one to the `choice` counter of the poll with `poll_id` and returns
    /// the poll as it is after the increment.
    ///
    /// This must be a single atomic store operation. Returns `Ok(None)` when no
    /// poll has that id, in which case nothing was written.
    async fn increment_vote(&self, poll_id: ObjectId, choice: VoteChoice)
        -> AppResult<Option<Poll>>;

    async fn count_polls(&self) -> AppResult<u64>;

    async fn insert_polls(&self, polls: Vec<Poll>) -> AppResult<()>;
}

#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Up to `limit` articles, newest `created_at` first.
    async fn latest_news(&self, limit: usize) -> AppResult<Vec<NewsArticle>>;

    async fn count_news(&self) -> AppResult<u64>;

    async fn insert_news(&self, articles: Vec<NewsArticle>) -> AppResult<()>;
}

#[async_trait]
pub trait QuoteStore: Send + Sync {
    async fn first_quote(&self) -> AppResult<Option<Quote>>;

    async fn count_quotes(&self) -> AppResult<u64>;

    async fn insert_quotes(&self, quotes: Vec<Quote>) -> AppResult<()>;
}

#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn insert_game_score(&self, score: &GameScore) -> AppResult<ObjectId>;

    async fn insert_volunteer(&self, form: &VolunteerForm) -> AppResult<ObjectId>;
}

/// Every collection at once; what a backend must implement to serve the API.
pub trait Store: PollStore + NewsStore + QuoteStore + SubmissionStore {}

impl<T> Store for T where T: PollStore + NewsStore + QuoteStore + SubmissionStore {}
