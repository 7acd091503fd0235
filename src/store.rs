use log::{error, info};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::RecipeError;
use crate::fetcher::RecipeFetcher;
use crate::github::IssueTracker;
use crate::model::Recipe;

/// Lifecycle of one fetch
#[derive(Debug, Clone, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Recipe>),
    Failed(Arc<RecipeError>),
}

impl FetchState {
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Loaded(_) | FetchState::Failed(_))
    }
}

/// Holds the outcome of a fetch for consumers to poll or subscribe to.
///
/// Once settled, exactly one of [`recipes`](Self::recipes) and
/// [`error`](Self::error) is `Some`. Starting a second fetch while one is
/// loading is up to the caller to avoid.
#[derive(Debug)]
pub struct RecipeStore {
    state: watch::Sender<FetchState>,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self { state }
    }

    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    pub fn recipes(&self) -> Option<Vec<Recipe>> {
        match &*self.state.borrow() {
            FetchState::Loaded(recipes) => Some(recipes.clone()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<Arc<RecipeError>> {
        match &*self.state.borrow() {
            FetchState::Failed(e) => Some(Arc::clone(e)),
            _ => None,
        }
    }

    /// Receive every state change from now on
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Run one fetch, moving through `Loading` to `Loaded` or `Failed`.
    pub async fn load<T: IssueTracker>(&self, fetcher: &RecipeFetcher<T>) {
        self.state.send_replace(FetchState::Loading);

        let settled = match fetcher.fetch_all().await {
            Ok(recipes) => {
                info!("Loaded {} recipes", recipes.len());
                FetchState::Loaded(recipes)
            }
            Err(e) => {
                error!("Failed to load recipes: {}", e);
                FetchState::Failed(Arc::new(e))
            }
        };
        self.state.send_replace(settled);
    }

    /// Launch the fetch as a background task.
    pub fn spawn<T>(self: &Arc<Self>, fetcher: RecipeFetcher<T>) -> JoinHandle<()>
    where
        T: IssueTracker + 'static,
    {
        let store = Arc::clone(self);
        tokio::spawn(async move { store.load(&fetcher).await })
    }
}
