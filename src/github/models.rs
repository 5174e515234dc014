//! Domain types for milestones and issues, plus the serde structs that
//! mirror the GitHub REST payloads they are built from.

use serde::Deserialize;

/// A milestone offered in the selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// API identifier used in issue queries.
    pub number: u64,
    /// Display title.
    pub title: String,
}

/// An issue line of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    /// URL of the associated pull request, when the item is one.
    /// A non-empty value excludes the item from the summary.
    pub pull_request_url: Option<String>,
}

/// Issue state filter accepted by the issues endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiMilestone {
    pub(super) number: u64,
    pub(super) title: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiIssue {
    pub(super) number: u64,
    pub(super) title: String,
    pub(super) pull_request: Option<ApiPullRequestRef>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiPullRequestRef {
    pub(super) url: Option<String>,
}

impl From<ApiMilestone> for Milestone {
    fn from(value: ApiMilestone) -> Self {
        Milestone {
            number: value.number,
            title: value.title,
        }
    }
}

impl From<ApiIssue> for Issue {
    fn from(value: ApiIssue) -> Self {
        Issue {
            number: value.number,
            title: value.title,
            pull_request_url: value.pull_request.and_then(|pr| pr.url),
        }
    }
}
