pub mod assembler;
pub mod builder;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod github;
pub mod ingredient;
pub mod metadata;
pub mod model;
pub mod store;

pub use assembler::assemble_recipe;
pub use builder::RecipeFetcherBuilder;
pub use config::RecipesConfig;
pub use error::RecipeError;
pub use fetcher::RecipeFetcher;
pub use github::{GithubClient, Issue, IssueComment, IssueTracker, Label, User};
pub use ingredient::parse_ingredient;
pub use model::{Comment, Ingredient, Recipe, Tag};
pub use store::{FetchState, RecipeStore};

/// Fetch the recipes of a public GitHub repository with default settings.
pub async fn fetch_recipes(owner: &str, repo: &str) -> Result<Vec<Recipe>, RecipeError> {
    RecipeFetcher::builder()
        .owner(owner)
        .repo(repo)
        .build()?
        .fetch_all()
        .await
}

/// Fetch the recipes of the repository named in `config`.
pub async fn fetch_recipes_with_config(
    config: &RecipesConfig,
) -> Result<Vec<Recipe>, RecipeError> {
    RecipeFetcherBuilder::from_config(config)
        .build()?
        .fetch_all()
        .await
}
