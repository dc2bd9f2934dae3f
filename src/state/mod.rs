use std::sync::Arc;

use crate::db::store::{NewsStore, QuoteStore, Store, SubmissionStore};
use crate::services::poll_service::PollService;

#[derive(Clone)]
pub struct AppState {
    pub polls: PollService,
    pub news: Arc<dyn NewsStore>,
    pub quotes: Arc<dyn QuoteStore>,
    pub submissions: Arc<dyn SubmissionStore>,
}

impl AppState {
    /// Wires every collaborator to the same storage backend.
    pub fn new<S: Store + 'static>(store: Arc<S>) -> Self {
        Self {
            polls: PollService::new(store.clone()),
            news: store.clone(),
            quotes: store.clone(),
            submissions: store,
        }
    }
}
