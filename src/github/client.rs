//! GitHub REST client implementation

use crate::config::GitHubConfig;
use crate::error::{map_branch_list_status, map_repo_list_status};
use crate::Result;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Repository owner account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// A commit identified by its content hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
}

/// A named pointer within a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: Commit,
}

/// Raw repository record as returned by the upstream listing.
///
/// Carries no branch data; the aggregator attaches branches after its
/// per-repository fan-out. Upstream fields beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: Owner,
    #[serde(default)]
    pub fork: bool,
}

/// Read operations against a source code hosting API.
///
/// The aggregator depends on this trait rather than the concrete client so
/// tests can inject a fake host with scripted responses and latencies.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// List a user's repositories (branches unpopulated)
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>>;

    /// List the branches of one repository
    async fn list_branches(&self, username: &str, repository: &str) -> Result<Vec<Branch>>;
}

/// GitHub API client
///
/// One immutable handle per process; the inner reqwest client owns the
/// connection pool shared by all concurrent requests.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl GitHubClient {
    /// Create a new GitHub client from config
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = header::HeaderMap::new();
                headers.insert(
                    header::USER_AGENT,
                    header::HeaderValue::from_static("repolens/0.1"),
                );
                headers.insert(
                    header::ACCEPT,
                    header::HeaderValue::from_static("application/vnd.github.v3+json"),
                );
                headers
            })
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.token.clone(),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    /// List a user's repositories via `GET /users/{username}/repos`
    ///
    /// Fails with `UserNotFound` on 404, `AccessDenied` on 403,
    /// `BadRequest` on other 4xx, `ServiceUnavailable` on 503 and
    /// `Upstream` on other 5xx. No retries are performed.
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!("{}/users/{}/repos", self.base_url, username);

        debug!(username = %username, "Listing user repositories");

        let mut request = self.client.get(&url);
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        match response.status() {
            StatusCode::OK => {
                let repositories: Vec<Repository> = response.json().await?;
                debug!(
                    username = %username,
                    count = repositories.len(),
                    "Repository listing complete"
                );
                Ok(repositories)
            }
            status => Err(map_repo_list_status(status, username)),
        }
    }

    /// List a repository's branches via `GET /repos/{username}/{repository}/branches`
    async fn list_branches(&self, username: &str, repository: &str) -> Result<Vec<Branch>> {
        let url = format!("{}/repos/{}/{}/branches", self.base_url, username, repository);

        debug!(username = %username, repo = %repository, "Listing branches");

        let mut request = self.client.get(&url);
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        match response.status() {
            StatusCode::OK => {
                let branches: Vec<Branch> = response.json().await?;
                Ok(branches)
            }
            status => Err(map_branch_list_status(status, repository)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> GitHubConfig {
        GitHubConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_client_creation() {
        let client = GitHubClient::new(&test_config("https://api.github.com")).unwrap();
        assert_eq!(client.base_url(), "https://api.github.com");
        assert!(client.auth_token.is_none());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = GitHubClient::new(&test_config("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_with_token() {
        let client = GitHubClient::new(&test_config("https://api.github.com"))
            .unwrap()
            .with_token("secret");
        assert_eq!(client.auth_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_repository_decoding_ignores_extra_fields() {
        let json = r#"{"name":"r1","owner":{"login":"u"},"fork":false,"stargazers_count":42,"private":false}"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "r1");
        assert_eq!(repo.owner.login, "u");
        assert!(!repo.fork);
    }

    #[test]
    fn test_branch_decoding() {
        let json = r#"[{"name":"main","commit":{"sha":"abc","url":"ignored"}}]"#;
        let branches: Vec<Branch> = serde_json::from_str(json).unwrap();
        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].name, "main");
        assert_eq!(branches[0].commit.sha, "abc");
    }
}
