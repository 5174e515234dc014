//! Pure issue-list transformations between the API response and the
//! rendered summary.

use crate::github::models::Issue;

/// An issue counts as a pull request when its pull-request marker carries
/// a non-empty URL.
pub fn is_pull_request(issue: &Issue) -> bool {
    issue
        .pull_request_url
        .as_deref()
        .is_some_and(|url| !url.is_empty())
}

/// Drops every pull request from the list, keeping plain issues in their
/// incoming order. Idempotent.
pub fn filter_pull_requests(issues: Vec<Issue>) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|issue| !is_pull_request(issue))
        .collect()
}

/// Sorts newest (highest number) first. The API order is not relied upon.
pub fn sort_newest_first(issues: &mut [Issue]) {
    issues.sort_by(|a, b| b.number.cmp(&a.number));
}
