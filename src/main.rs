use log::{error, info};
use std::env;
use std::process::ExitCode;

use issue_recipes::{RecipeFetcherBuilder, RecipeStore, RecipesConfig};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = RecipesConfig::load()?;

    // Optional `owner/repo` argument overrides the configured repository
    let mut builder = RecipeFetcherBuilder::from_config(&config);
    if let Some(slug) = env::args().nth(1) {
        builder = builder.repository(&slug);
    }
    let fetcher = builder.build()?;

    let store = RecipeStore::new();
    info!("Fetching recipes...");
    store.load(&fetcher).await;

    if let Some(e) = store.error() {
        return Err(e.to_string().into());
    }
    let recipes = store.recipes().unwrap_or_default();
    println!("{}", serde_json::to_string_pretty(&recipes)?);

    Ok(())
}
