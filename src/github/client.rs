//! GitHub REST API v3 client over reqwest with basic-auth credentials.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::{Credentials, RepositoryId};
use crate::error::SummaryError;
use crate::github::GitHubApi;
use crate::github::models::{ApiIssue, ApiMilestone, Issue, IssueState, Milestone};

const API_ROOT: &str = "https://api.github.com";
const USER_AGENT: &str = "ghsum-cli";

/// Client bound to one set of credentials. No validation request is made
/// up front; bad credentials surface on the first real call.
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl GitHubClient {
    pub fn new(credentials: Credentials) -> Result<GitHubClient, SummaryError> {
        GitHubClient::with_base_url(credentials, API_ROOT)
    }

    /// Like [`GitHubClient::new`] with the API root overridden, so tests
    /// can point the client at a local mock server.
    pub fn with_base_url(
        credentials: Credentials,
        base_url: &str,
    ) -> Result<GitHubClient, SummaryError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|err| SummaryError::NetworkFailure {
                message: format!("failed to create HTTP client: {err}"),
            })?;
        Ok(GitHubClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, SummaryError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .basic_auth(
                &self.credentials.username,
                Some(&self.credentials.password),
            )
            .query(query)
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|err| SummaryError::ApiFailure {
                    message: format!("invalid response body: {err}"),
                })
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(SummaryError::AuthenticationFailure {
                message: error_detail(response).await,
            })
        } else {
            Err(SummaryError::ApiFailure {
                message: error_detail(response).await,
            })
        }
    }
}

async fn error_detail(response: reqwest::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => format!("HTTP {status}: {}", body.trim()),
        _ => format!("HTTP {status}"),
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn list_open_milestones(
        &self,
        repo: &RepositoryId,
    ) -> Result<Vec<Milestone>, SummaryError> {
        let path = format!("/repos/{}/{}/milestones", repo.owner, repo.name);
        let milestones: Vec<ApiMilestone> = self
            .get_json(&path, &[("state", "open".to_string())])
            .await?;
        Ok(milestones.into_iter().map(Milestone::from).collect())
    }

    async fn list_issues(
        &self,
        repo: &RepositoryId,
        milestone: u64,
        state: IssueState,
    ) -> Result<Vec<Issue>, SummaryError> {
        let path = format!("/repos/{}/{}/issues", repo.owner, repo.name);
        let query = [
            ("filter", "all".to_string()),
            ("state", state.as_str().to_string()),
            ("milestone", milestone.to_string()),
        ];
        let issues: Vec<ApiIssue> = self.get_json(&path, &query).await?;
        Ok(issues.into_iter().map(Issue::from).collect())
    }
}
