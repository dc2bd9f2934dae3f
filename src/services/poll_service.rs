//! Poll listing and voting.
//!
//! The service holds no state of its own. A vote is validated up front and then
//! applied as one atomic increment-and-fetch on the injected [`PollStore`], so
//! concurrent votes never lose updates and a failed or cancelled request never
//! leaves a partial write behind. Nothing here retries.

use std::sync::Arc;

use bson::oid::ObjectId;
use tracing::{debug, info};

use crate::db::store::PollStore;
use crate::models::poll_models::{Poll, VoteChoice};
use crate::utils::error::{AppError, AppResult};

#[derive(Clone)]
pub struct PollService {
    store: Arc<dyn PollStore>,
}

impl PollService {
    pub fn new(store: Arc<dyn PollStore>) -> Self {
        Self { store }
    }

    pub async fn list_polls(&self) -> AppResult<Vec<Poll>> {
        let polls = self.store.list_polls().await?;
        debug!(count = polls.len(), "listed polls");

        Ok(polls)
    }

    /// Records one `vote` on the poll identified by `poll_id` and returns the
    /// updated poll.
    ///
    /// # Errors
    ///
    /// * `BadRequest` if `vote` is not `yes`/`no` or `poll_id` is not a valid
    ///   ObjectId. The store is not touched.
    /// * `NotFound` if no poll has that id.
    /// * `DatabaseError` if the store fails or times out.
    pub async fn cast_vote(&self, poll_id: &str, vote: &str) -> AppResult<Poll> {
        let choice: VoteChoice = vote.parse()?;

        let poll_obj_id = ObjectId::parse_str(poll_id)
            .map_err(|_| AppError::BadRequest("Invalid poll id".to_string()))?;

        let poll = self
            .store
            .increment_vote(poll_obj_id, choice)
            .await?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

        info!(poll_id = %poll.id, %choice, yes = poll.yes, no = poll.no, "vote recorded");

        Ok(poll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_store::MemoryStore;
    use crate::db::seed::sample_polls;
    use async_trait::async_trait;

    async fn service_with(polls: Vec<Poll>) -> (PollService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        store.insert_polls(polls).await.unwrap();
        (PollService::new(store.clone()), store)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_yes_votes_are_all_counted() {
        let poll = Poll::new("Concurrent?", "समवर्ती?");
        let poll_id = poll.id.to_hex();
        let (service, store) = service_with(vec![poll]).await;

        const VOTERS: usize = 200;
        let handles: Vec<_> = (0..VOTERS)
            .map(|_| {
                let service = service.clone();
                let poll_id = poll_id.clone();
                tokio::spawn(async move { service.cast_vote(&poll_id, "yes").await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let polls = store.list_polls().await.unwrap();
        assert_eq!(polls[0].yes, VOTERS as i64);
        assert_eq!(polls[0].no, 0);
    }

    #[tokio::test]
    async fn test_renewable_energy_scenario() {
        let (service, _store) = service_with(sample_polls()).await;
        let poll_id = service.list_polls().await.unwrap()[0].id.to_hex();

        for _ in 0..3 {
            service.cast_vote(&poll_id, "yes").await.unwrap();
        }
        let after_yes = service.list_polls().await.unwrap();
        assert_eq!((after_yes[0].yes, after_yes[0].no), (3, 0));

        let poll = service.cast_vote(&poll_id, "no").await.unwrap();
        assert_eq!((poll.yes, poll.no), (3, 1));
        assert_eq!(poll.question_en, "Should India invest more in renewable energy?");
    }

    #[tokio::test]
    async fn test_counters_never_decrease() {
        let poll = Poll::new("Monotonic?", "एकदिष्ट?");
        let poll_id = poll.id.to_hex();
        let (service, _store) = service_with(vec![poll]).await;

        let votes = ["yes", "no", "no", "yes", "maybe", "yes", "no", "", "yes"];
        let (mut last_yes, mut last_no) = (0, 0);

        for vote in votes {
            let _ = service.cast_vote(&poll_id, vote).await;
            let current = &service.list_polls().await.unwrap()[0];

            assert!(current.yes >= last_yes && current.no >= last_no);
            assert!(current.yes >= 0 && current.no >= 0);
            last_yes = current.yes;
            last_no = current.no;
        }

        assert_eq!((last_yes, last_no), (4, 3));
    }

    #[tokio::test]
    async fn test_unknown_poll_is_not_found_and_nothing_changes() {
        let polls = vec![Poll::new("One?", "एक?"), Poll::new("Two?", "दो?")];
        let (service, store) = service_with(polls.clone()).await;

        let err = service
            .cast_vote(&ObjectId::new().to_hex(), "yes")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.list_polls().await.unwrap(), polls);
    }

    #[tokio::test]
    async fn test_invalid_choice_is_bad_request_and_nothing_changes() {
        let poll = Poll::new("Choice?", "विकल्प?");
        let poll_id = poll.id.to_hex();
        let (service, store) = service_with(vec![poll.clone()]).await;

        for vote in ["maybe", "_id", "question_en", "Yes"] {
            let err = service.cast_vote(&poll_id, vote).await.unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "{vote:?}");
        }

        assert_eq!(store.list_polls().await.unwrap(), vec![poll]);
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let poll = Poll::new("Id?", "आईडी?");
        let (service, store) = service_with(vec![poll.clone()]).await;

        for poll_id in ["", "not-an-object-id", "123", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            let err = service.cast_vote(poll_id, "yes").await.unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "{poll_id:?}");
        }

        assert_eq!(store.list_polls().await.unwrap(), vec![poll]);
    }

    #[tokio::test]
    async fn test_list_returns_every_poll() {
        let p1 = Poll::new("P1?", "प1?");
        let p2 = Poll::new("P2?", "प2?");
        let (service, _store) = service_with(vec![p1.clone(), p2.clone()]).await;

        let polls = service.list_polls().await.unwrap();

        assert_eq!(polls.len(), 2);
        assert!(polls.iter().any(|p| p.id == p1.id));
        assert!(polls.iter().any(|p| p.id == p2.id));
    }

    struct UnreachableStore;

    #[async_trait]
    impl PollStore for UnreachableStore {
        async fn list_polls(&self) -> AppResult<Vec<Poll>> {
            Err(AppError::DatabaseError("server selection timeout".to_string()))
        }

        async fn increment_vote(
            &self,
            _poll_id: ObjectId,
            _choice: VoteChoice,
        ) -> AppResult<Option<Poll>> {
            Err(AppError::DatabaseError("server selection timeout".to_string()))
        }

        async fn count_polls(&self) -> AppResult<u64> {
            Err(AppError::DatabaseError("server selection timeout".to_string()))
        }

        async fn insert_polls(&self, _polls: Vec<Poll>) -> AppResult<()> {
            Err(AppError::DatabaseError("server selection timeout".to_string()))
        }
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_database_error() {
        let service = PollService::new(Arc::new(UnreachableStore));

        let err = service
            .cast_vote(&ObjectId::new().to_hex(), "no")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));

        let err = service.list_polls().await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_the_store() {
        let service = PollService::new(Arc::new(UnreachableStore));

        let err = service
            .cast_vote(&ObjectId::new().to_hex(), "maybe")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = service.cast_vote("bad-id", "yes").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
