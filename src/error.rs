use thiserror::Error;

/// Errors that can occur while turning issues into recipes
#[derive(Error, Debug)]
pub enum RecipeError {
    /// HTTP failure talking to the issue tracker
    #[error("Failed to fetch from issue tracker: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Issue tracker failure that did not come from HTTP
    #[error("Issue tracker error: {0}")]
    TrackerError(String),

    /// The metadata block of an issue is not valid YAML
    #[error("Invalid metadata block: {0}")]
    MetadataError(#[from] serde_yaml::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
