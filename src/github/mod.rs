//! GitHub REST API access: the narrow gateway trait the pipeline depends
//! on, the reqwest-backed client, and the issue-list transformations.

pub mod client;
pub mod issues;
pub mod models;

use async_trait::async_trait;

use crate::config::RepositoryId;
use crate::error::SummaryError;
use crate::github::models::{Issue, IssueState, Milestone};

/// The two GitHub operations the summary needs. Tests substitute a
/// fixture-backed implementation.
#[async_trait]
pub trait GitHubApi {
    /// Lists the repository's open milestones in API order.
    async fn list_open_milestones(
        &self,
        repo: &RepositoryId,
    ) -> Result<Vec<Milestone>, SummaryError>;

    /// Lists the issues of one milestone filtered by state. Pull requests
    /// are still included here; filtering is the caller's concern.
    async fn list_issues(
        &self,
        repo: &RepositoryId,
        milestone: u64,
        state: IssueState,
    ) -> Result<Vec<Issue>, SummaryError>;
}
