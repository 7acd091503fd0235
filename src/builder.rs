use std::time::Duration;

use crate::config::RecipesConfig;
use crate::error::RecipeError;
use crate::fetcher::RecipeFetcher;
use crate::github::{GithubClient, DEFAULT_API_URL, DEFAULT_USER_AGENT};

/// Builder for a [`RecipeFetcher`] reading issues from GitHub
#[derive(Debug, Default)]
pub struct RecipeFetcherBuilder {
    owner: Option<String>,
    repo: Option<String>,
    api_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RecipeFetcherBuilder {
    /// Start from a loaded configuration
    pub fn from_config(config: &RecipesConfig) -> Self {
        Self {
            owner: config.github.owner.clone(),
            repo: config.github.repo.clone(),
            api_url: Some(config.github.api_url.clone()),
            timeout: Some(Duration::from_secs(config.timeout)),
            user_agent: Some(config.github.user_agent.clone()),
        }
    }

    /// Set owner and name from an `owner/repo` slug
    ///
    /// # Example
    /// ```
    /// use issue_recipes::RecipeFetcher;
    ///
    /// let builder = RecipeFetcher::builder().repository("chef/livre");
    /// ```
    pub fn repository(mut self, slug: &str) -> Self {
        match slug.split_once('/') {
            Some((owner, repo)) => {
                self.owner = Some(owner.to_string());
                self.repo = Some(repo.to_string());
            }
            // Left unset so build() reports it
            None => {
                self.owner = None;
                self.repo = None;
            }
        }
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    /// Point at another API root, e.g. GitHub Enterprise
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use issue_recipes::RecipeFetcher;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFetcher::builder()
    ///     .repository("chef/livre")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the fetcher
    ///
    /// # Errors
    /// Returns `RecipeError::BuilderError` when the repository is not set.
    pub fn build(self) -> Result<RecipeFetcher<GithubClient>, RecipeError> {
        let owner = self
            .owner
            .filter(|o| !o.is_empty())
            .ok_or_else(|| RecipeError::BuilderError("repository owner is not set".to_string()))?;
        let repo = self
            .repo
            .filter(|r| !r.is_empty())
            .ok_or_else(|| RecipeError::BuilderError("repository name is not set".to_string()))?;

        let client = GithubClient::with_options(
            owner,
            repo,
            self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            self.timeout,
            self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT),
        )?;

        Ok(RecipeFetcher::new(client))
    }
}
