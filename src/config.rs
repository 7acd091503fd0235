use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::github::{DEFAULT_API_URL, DEFAULT_USER_AGENT};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct RecipesConfig {
    /// Repository whose issues hold the recipes
    #[serde(default)]
    pub github: GithubConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// Where and how to reach the GitHub API
#[derive(Debug, Deserialize, Clone)]
pub struct GithubConfig {
    /// Repository owner (user or organisation)
    pub owner: Option<String>,
    /// Repository name
    pub repo: Option<String>,
    /// Base URL of the REST API (for GitHub Enterprise or tests)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            owner: None,
            repo: None,
            api_url: default_api_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            github: GithubConfig::default(),
            timeout: default_timeout(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl RecipesConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with ISSUE_RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: ISSUE_RECIPES__GITHUB__OWNER
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration, see [`RecipesConfig::load`]
pub fn load_config() -> Result<RecipesConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: ISSUE_RECIPES__GITHUB__REPO
        .add_source(
            Environment::with_prefix("ISSUE_RECIPES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
