//! The summary pipeline: list milestones, ask the user for one, fetch
//! both issue sections and render them. All collaborators are injected
//! so the whole flow runs in tests without a terminal or network.

use std::io::Write;

use crate::config::{Config, RepositoryId};
use crate::error::SummaryError;
use crate::github::GitHubApi;
use crate::github::issues::{filter_pull_requests, sort_newest_first};
use crate::github::models::{Issue, IssueState, Milestone};
use crate::prompt::Prompter;
use crate::summary::{Section, write_summary};

/// Runs the full summary for a resolved configuration.
///
/// Fails on the first error; nothing is retried and no partial summary is
/// printed after a failure.
pub async fn run_summary<W: Write>(
    api: &dyn GitHubApi,
    config: &Config,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<(), SummaryError> {
    let milestones = api.list_open_milestones(&config.repo).await?;
    if milestones.is_empty() {
        return Err(SummaryError::NoMilestonesFound {
            repo: config.repo.to_string(),
        });
    }

    let milestone = ask_milestone(&milestones, prompter, out)?;

    let open = fetch_section(api, &config.repo, milestone.number, IssueState::Open).await?;
    let closed = fetch_section(api, &config.repo, milestone.number, IssueState::Closed).await?;

    write_summary(
        out,
        &milestone.title,
        &[
            Section {
                title: &config.title_open,
                issues: &open,
            },
            Section {
                title: &config.title_closed,
                issues: &closed,
            },
        ],
    )?;
    Ok(())
}

/// Prints the milestones with zero-based indices and reads one index from
/// the prompter. Non-numeric or out-of-range input is `InvalidSelection`;
/// no issue query is made in that case.
fn ask_milestone<'a, W: Write>(
    milestones: &'a [Milestone],
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<&'a Milestone, SummaryError> {
    writeln!(out, "Choose milestone:")?;
    for (index, milestone) in milestones.iter().enumerate() {
        writeln!(out, "{index} {}", milestone.title)?;
    }

    let answer = prompter.read_line("Answer: ")?;
    let input = answer.trim();
    let choice: usize = input
        .parse()
        .map_err(|_| SummaryError::InvalidSelection {
            input: input.to_string(),
        })?;
    milestones
        .get(choice)
        .ok_or_else(|| SummaryError::InvalidSelection {
            input: input.to_string(),
        })
}

async fn fetch_section(
    api: &dyn GitHubApi,
    repo: &RepositoryId,
    milestone: u64,
    state: IssueState,
) -> Result<Vec<Issue>, SummaryError> {
    let mut issues = filter_pull_requests(api.list_issues(repo, milestone, state).await?);
    sort_newest_first(&mut issues);
    Ok(issues)
}
