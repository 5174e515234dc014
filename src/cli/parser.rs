/// Options collected from the command line. Any `None` field that is
/// required gets backfilled interactively later.
#[derive(Debug, Default, PartialEq)]
pub struct CliOptions {
    pub username: Option<String>,
    pub password: Option<String>,
    pub repo: Option<String>,
    pub title_open: Option<String>,
    pub title_closed: Option<String>,
}

/// Enum representing CLI commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Summary(CliOptions),
    Help,
    Unknown(String),
}

/// Usage text printed for `help`, `-h` and `--help`.
pub const USAGE: &str = "Usage: ghsum [-u <username>] [-p <password>] [-r <owner>/<repo>] [-to <title>] [-tc <title>]

Prints an open/closed issue summary for one milestone of a GitHub repository.

Options:
  -u   GitHub username
  -p   GitHub password (prompted with masked input when omitted)
  -r   GitHub repository as <owner>/<repo>
  -to  Title of the open-issues section (default \"Open:\")
  -tc  Title of the closed-issues section (default \"Closed:\")

Values omitted from the flags are requested interactively.";

/// Parse command line arguments and return a Command
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
///
/// # Returns
/// * `Command` - The parsed command
pub fn parse_args(args: &[String]) -> Command {
    let mut options = CliOptions::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        let slot = match arg.as_str() {
            "help" | "-h" | "--help" => return Command::Help,
            "-u" => &mut options.username,
            "-p" => &mut options.password,
            "-r" => &mut options.repo,
            "-to" => &mut options.title_open,
            "-tc" => &mut options.title_closed,
            flag => return Command::Unknown(format!("Unknown option: {flag}")),
        };

        match rest.next() {
            Some(value) => *slot = Some(value.clone()),
            None => return Command::Unknown(format!("Missing value for option {arg}")),
        }
    }

    Command::Summary(options)
}
