use log::{error, info};

use crate::assembler::assemble_recipe;
use crate::builder::RecipeFetcherBuilder;
use crate::error::RecipeError;
use crate::github::IssueTracker;
use crate::model::Recipe;

/// Fetches issues and comments and turns them into recipes
pub struct RecipeFetcher<T> {
    tracker: T,
}

impl RecipeFetcher<()> {
    /// Start configuring a fetcher backed by the GitHub API
    pub fn builder() -> RecipeFetcherBuilder {
        RecipeFetcherBuilder::default()
    }
}

impl<T: IssueTracker> RecipeFetcher<T> {
    pub fn new(tracker: T) -> Self {
        Self { tracker }
    }

    /// Fetch everything and assemble one recipe per open issue.
    ///
    /// Both retrievals run concurrently; if either fails nothing is returned
    /// but the error. Issues that fail to assemble are logged and left out,
    /// the rest keep their tracker order.
    pub async fn fetch_all(&self) -> Result<Vec<Recipe>, RecipeError> {
        let (issues, comments) = tokio::try_join!(
            self.tracker.fetch_open_issues(),
            self.tracker.fetch_comments()
        )?;
        info!(
            "Fetched {} issues and {} comments",
            issues.len(),
            comments.len()
        );

        let recipes = issues
            .iter()
            .filter_map(|issue| match assemble_recipe(issue, &comments) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    error!("Skipping issue #{} ({}): {}", issue.number, issue.title, e);
                    None
                }
            })
            .collect::<Vec<_>>();

        info!("Assembled {} of {} recipes", recipes.len(), issues.len());
        Ok(recipes)
    }
}
