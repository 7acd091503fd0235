mod client;

pub use client::{GithubClient, DEFAULT_API_URL, DEFAULT_USER_AGENT};

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::RecipeError;

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
    /// Six hex digits, no leading `#`
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub html_url: String,
}

/// A comment, tied to its issue by number
#[derive(Debug, Clone)]
pub struct IssueComment {
    pub issue_number: u64,
    pub user: User,
    pub body: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Source of issues and comments
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// All open issues, in tracker order
    async fn fetch_open_issues(&self) -> Result<Vec<Issue>, RecipeError>;

    /// Comments of every issue in the repository
    async fn fetch_comments(&self) -> Result<Vec<IssueComment>, RecipeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_with_null_body() {
        let issue: Issue = serde_json::from_str(
            r#"{
                "id": 1001,
                "number": 3,
                "title": "Tarte aux pommes",
                "body": null,
                "labels": [{"id": 9, "name": "dessert", "color": "ff0000"}],
                "html_url": "https://github.com/o/r/issues/3",
                "state": "open"
            }"#,
        )
        .unwrap();

        assert_eq!(issue.body, "");
        assert_eq!(issue.labels[0].name, "dessert");
        assert_eq!(issue.number, 3);
    }
}
