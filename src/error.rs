use thiserror::Error;

/// Errors surfaced while resolving configuration or talking to GitHub.
///
/// Every kind is terminal for the run: the binary prints the message to
/// stderr and exits non-zero.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SummaryError {
    /// A required value was absent from the flags and could not be
    /// resolved interactively.
    #[error("missing required value: {name}")]
    MissingConfig {
        /// Name of the missing option.
        name: &'static str,
    },

    /// Masked input was requested but stdin is not a terminal.
    #[error("no interactive terminal available for {purpose} entry")]
    NoInteractiveTerminal {
        /// What was being read (e.g. "password").
        purpose: &'static str,
    },

    /// The repository argument was not in `owner/name` form.
    #[error("invalid repository format {spec:?}: expected <owner>/<name>")]
    InvalidRepositorySpec {
        /// The argument as supplied.
        spec: String,
    },

    /// GitHub rejected the credentials.
    #[error("GitHub rejected the credentials: {message}")]
    AuthenticationFailure {
        /// Error detail from the 401/403 response.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    NetworkFailure {
        /// Transport-level error detail.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    ApiFailure {
        /// Status or body describing the failure.
        message: String,
    },

    /// The milestone selection was not a number or was out of range.
    #[error("invalid milestone selection {input:?}: expected an index from the list")]
    InvalidSelection {
        /// The input as typed.
        input: String,
    },

    /// The repository has no open milestones to choose from.
    #[error("no open milestones found for {repo}")]
    NoMilestonesFound {
        /// Repository in `owner/name` form.
        repo: String,
    },

    /// A local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying operation.
        message: String,
    },
}

impl From<std::io::Error> for SummaryError {
    fn from(err: std::io::Error) -> Self {
        SummaryError::Io {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for SummaryError {
    fn from(err: reqwest::Error) -> Self {
        SummaryError::NetworkFailure {
            message: err.to_string(),
        }
    }
}
