use std::fmt;

use crate::cli::parser::CliOptions;
use crate::error::SummaryError;
use crate::prompt::Prompter;

/// Default title for the open-issues section.
pub const DEFAULT_TITLE_OPEN: &str = "Open:";
/// Default title for the closed-issues section.
pub const DEFAULT_TITLE_CLOSED: &str = "Closed:";

/// Basic-auth credentials. The password is never logged or echoed.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// A repository addressed as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl RepositoryId {
    /// Parses a `<owner>/<name>` specification.
    ///
    /// Exactly two non-empty slash-separated parts are accepted; anything
    /// else fails with `InvalidRepositorySpec` before any network call.
    pub fn parse(spec: &str) -> Result<RepositoryId, SummaryError> {
        let parts: Vec<&str> = spec.split('/').collect();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            Ok(RepositoryId {
                owner: parts[0].to_string(),
                name: parts[1].to_string(),
            })
        } else {
            Err(SummaryError::InvalidRepositorySpec {
                spec: spec.to_string(),
            })
        }
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Fully resolved run configuration.
pub struct Config {
    pub credentials: Credentials,
    pub repo: RepositoryId,
    pub title_open: String,
    pub title_closed: String,
}

impl Config {
    /// Resolves the configuration from CLI options, asking the prompter
    /// for any of username/password/repository that was not supplied.
    ///
    /// Title overrides fall back to [`DEFAULT_TITLE_OPEN`] and
    /// [`DEFAULT_TITLE_CLOSED`]. An empty interactive answer for a
    /// required value is a `MissingConfig` error.
    pub fn resolve(
        options: CliOptions,
        prompter: &mut dyn Prompter,
    ) -> Result<Config, SummaryError> {
        let username = match options.username {
            Some(value) => value,
            None => required(prompter.read_line("Username: ")?, "username")?,
        };
        let password = match options.password {
            Some(value) => value,
            None => required(prompter.read_password("Password: ")?, "password")?,
        };
        let spec = match options.repo {
            Some(value) => value,
            None => required(prompter.read_line("Repository (owner/name): ")?, "repository")?,
        };
        let repo = RepositoryId::parse(&spec)?;

        Ok(Config {
            credentials: Credentials { username, password },
            repo,
            title_open: options
                .title_open
                .unwrap_or_else(|| DEFAULT_TITLE_OPEN.to_string()),
            title_closed: options
                .title_closed
                .unwrap_or_else(|| DEFAULT_TITLE_CLOSED.to_string()),
        })
    }
}

fn required(value: String, name: &'static str) -> Result<String, SummaryError> {
    if value.trim().is_empty() {
        Err(SummaryError::MissingConfig { name })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;

    fn full_options() -> CliOptions {
        CliOptions {
            username: Some("octocat".to_string()),
            password: Some("hunter2".to_string()),
            repo: Some("owner/repo".to_string()),
            title_open: None,
            title_closed: None,
        }
    }

    #[test]
    fn test_parse_repository_id_valid() {
        let repo = RepositoryId::parse("octocat/hello-world").unwrap();
        assert_eq!(repo.owner, "octocat");
        assert_eq!(repo.name, "hello-world");
    }

    #[test]
    fn test_parse_repository_id_round_trips_through_display() {
        let repo = RepositoryId::parse("owner/repo").unwrap();
        assert_eq!(repo.to_string(), "owner/repo");
    }

    #[test]
    fn test_parse_repository_id_no_slash() {
        assert_eq!(
            RepositoryId::parse("ownerrepo"),
            Err(SummaryError::InvalidRepositorySpec {
                spec: "ownerrepo".to_string()
            })
        );
    }

    #[test]
    fn test_parse_repository_id_empty_owner() {
        assert!(RepositoryId::parse("/repo").is_err());
    }

    #[test]
    fn test_parse_repository_id_empty_name() {
        assert!(RepositoryId::parse("owner/").is_err());
    }

    #[test]
    fn test_parse_repository_id_too_many_slashes() {
        assert!(RepositoryId::parse("owner/repo/extra").is_err());
    }

    #[test]
    fn test_parse_repository_id_empty_string() {
        assert!(RepositoryId::parse("").is_err());
    }

    #[test]
    fn test_resolve_from_flags_uses_no_prompts() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let config = Config::resolve(full_options(), &mut prompter).unwrap();
        assert_eq!(config.credentials.username, "octocat");
        assert_eq!(config.credentials.password, "hunter2");
        assert_eq!(config.repo.to_string(), "owner/repo");
        assert!(prompter.prompts.is_empty());
    }

    #[test]
    fn test_resolve_applies_default_titles() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let config = Config::resolve(full_options(), &mut prompter).unwrap();
        assert_eq!(config.title_open, DEFAULT_TITLE_OPEN);
        assert_eq!(config.title_closed, DEFAULT_TITLE_CLOSED);
    }

    #[test]
    fn test_resolve_keeps_title_overrides() {
        let options = CliOptions {
            title_open: Some("Still open:".to_string()),
            title_closed: Some("Done:".to_string()),
            ..full_options()
        };
        let mut prompter = ScriptedPrompter::new(&[]);
        let config = Config::resolve(options, &mut prompter).unwrap();
        assert_eq!(config.title_open, "Still open:");
        assert_eq!(config.title_closed, "Done:");
    }

    #[test]
    fn test_resolve_backfills_missing_values_interactively() {
        let mut prompter = ScriptedPrompter::new(&["octocat", "hunter2", "owner/repo"]);
        let config = Config::resolve(CliOptions::default(), &mut prompter).unwrap();
        assert_eq!(config.credentials.username, "octocat");
        assert_eq!(config.credentials.password, "hunter2");
        assert_eq!(config.repo.to_string(), "owner/repo");
        assert_eq!(
            prompter.prompts,
            vec!["Username: ", "Password: ", "Repository (owner/name): "]
        );
    }

    #[test]
    fn test_resolve_empty_interactive_answer_is_missing_config() {
        let mut prompter = ScriptedPrompter::new(&["  "]);
        let result = Config::resolve(
            CliOptions {
                password: Some("hunter2".to_string()),
                repo: Some("owner/repo".to_string()),
                ..CliOptions::default()
            },
            &mut prompter,
        );
        assert_eq!(result.err(), Some(SummaryError::MissingConfig { name: "username" }));
    }

    #[test]
    fn test_resolve_without_terminal_fails_password_entry() {
        let mut prompter = ScriptedPrompter::new(&["owner/repo"]);
        prompter.terminal_available = false;
        let result = Config::resolve(
            CliOptions {
                username: Some("octocat".to_string()),
                ..CliOptions::default()
            },
            &mut prompter,
        );
        assert_eq!(
            result.err(),
            Some(SummaryError::NoInteractiveTerminal {
                purpose: "password"
            })
        );
    }

    #[test]
    fn test_resolve_invalid_repo_spec_from_flag() {
        let options = CliOptions {
            repo: Some("not-a-repo".to_string()),
            ..full_options()
        };
        let mut prompter = ScriptedPrompter::new(&[]);
        assert!(matches!(
            Config::resolve(options, &mut prompter),
            Err(SummaryError::InvalidRepositorySpec { .. })
        ));
    }
}
