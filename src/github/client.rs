use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{Issue, IssueComment, IssueTracker, User};
use crate::error::RecipeError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = concat!("issue-recipes/", env!("CARGO_PKG_VERSION"));

/// Read-only GitHub REST client for one repository
pub struct GithubClient {
    client: Client,
    api_url: String,
    owner: String,
    repo: String,
}

#[derive(Debug, Deserialize)]
struct CommentWire {
    issue_url: String,
    user: User,
    #[serde(default)]
    body: Option<String>,
}

impl GithubClient {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Result<Self, RecipeError> {
        Self::with_options(owner, repo, DEFAULT_API_URL, None, DEFAULT_USER_AGENT)
    }

    pub fn with_options(
        owner: impl Into<String>,
        repo: impl Into<String>,
        api_url: impl Into<String>,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self, RecipeError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .timeout(timeout.unwrap_or(Duration::from_secs(30)))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            owner: owner.into(),
            repo: repo.into(),
        })
    }

    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url, self.owner, self.repo, path
        )
    }
}

/// Issue number from an `issue_url` such as `.../repos/o/r/issues/42`
pub(crate) fn issue_number_from_url(issue_url: &str) -> Option<u64> {
    issue_url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

#[async_trait]
impl IssueTracker for GithubClient {
    async fn fetch_open_issues(&self) -> Result<Vec<Issue>, RecipeError> {
        let url = self.repo_url("issues");
        debug!("Fetching open issues from {}", url);

        let issues = self
            .client
            .get(&url)
            .query(&[("state", "open")])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Issue>>()
            .await?;

        debug!("Fetched {} open issues", issues.len());
        Ok(issues)
    }

    async fn fetch_comments(&self) -> Result<Vec<IssueComment>, RecipeError> {
        let url = self.repo_url("issues/comments");
        debug!("Fetching comments from {}", url);

        let wire = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<CommentWire>>()
            .await?;

        let comments = wire
            .into_iter()
            .filter_map(|comment| match issue_number_from_url(&comment.issue_url) {
                Some(issue_number) => Some(IssueComment {
                    issue_number,
                    user: comment.user,
                    body: comment.body.unwrap_or_default(),
                }),
                None => {
                    warn!(
                        "Skipping comment with unrecognised issue_url: {}",
                        comment.issue_url
                    );
                    None
                }
            })
            .collect::<Vec<_>>();

        debug!("Fetched {} comments", comments.len());
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[test]
    fn test_issue_number_from_url() {
        assert_eq!(
            issue_number_from_url("https://api.github.com/repos/o/r/issues/42"),
            Some(42)
        );
        assert_eq!(
            issue_number_from_url("https://api.github.com/repos/o/r/issues/7/"),
            Some(7)
        );
        assert_eq!(issue_number_from_url("https://api.github.com/repos/o/r"), None);
        assert_eq!(issue_number_from_url(""), None);
    }

    #[tokio::test]
    async fn test_fetch_open_issues() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/chef/livre/issues")
            .match_query(Matcher::UrlEncoded("state".into(), "open".into()))
            .match_header("accept", "application/vnd.github+json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{
                    "id": 11,
                    "number": 1,
                    "title": "Crêpes",
                    "body": "Mélanger",
                    "labels": [],
                    "html_url": "https://github.com/chef/livre/issues/1"
                }]"#,
            )
            .create_async()
            .await;

        let client =
            GithubClient::with_options("chef", "livre", server.url(), None, DEFAULT_USER_AGENT)
                .unwrap();
        let issues = client.fetch_open_issues().await.unwrap();

        mock.assert_async().await;
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].title, "Crêpes");
    }

    #[tokio::test]
    async fn test_fetch_comments_skips_unknown_issue_url() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/repos/chef/livre/issues/comments")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"issue_url": "https://api.github.com/repos/chef/livre/issues/1", "user": {"login": "alice"}, "body": "Délicieux"},
                    {"issue_url": "https://api.github.com/repos/chef/livre", "user": {"login": "bob"}, "body": "?"}
                ]"#,
            )
            .create_async()
            .await;

        let client =
            GithubClient::with_options("chef", "livre", server.url(), None, DEFAULT_USER_AGENT)
                .unwrap();
        let comments = client.fetch_comments().await.unwrap();

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].issue_number, 1);
        assert_eq!(comments[0].user.login, "alice");
        assert_eq!(comments[0].body, "Délicieux");
    }

    #[tokio::test]
    async fn test_http_error_is_fetch_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/repos/chef/livre/issues")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client =
            GithubClient::with_options("chef", "livre", server.url(), None, DEFAULT_USER_AGENT)
                .unwrap();
        let err = client.fetch_open_issues().await.unwrap_err();

        assert!(matches!(err, RecipeError::FetchError(_)));
    }
}
