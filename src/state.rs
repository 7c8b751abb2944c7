use crate::completion::CompletionStore;
use crate::plan::ReadingPlan;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub plan: Arc<ReadingPlan>,
    pub completions: Arc<Mutex<CompletionStore>>,
}

impl AppState {
    pub fn new(plan: ReadingPlan) -> Self {
        Self {
            plan: Arc::new(plan),
            completions: Arc::new(Mutex::new(CompletionStore::new())),
        }
    }
}
