use ghsum::cli::parser::{self, Command};
use ghsum::config::Config;
use ghsum::error::SummaryError;
use ghsum::github::client::GitHubClient;
use ghsum::prompt::TerminalPrompter;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    match parser::parse_args(&args) {
        Command::Help => println!("{}", parser::USAGE),
        Command::Unknown(message) => {
            eprintln!("{message}");
            eprintln!("{}", parser::USAGE);
            std::process::exit(2);
        }
        Command::Summary(options) => {
            if let Err(err) = summarize(options).await {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }
}

async fn summarize(options: ghsum::cli::parser::CliOptions) -> Result<(), SummaryError> {
    let mut prompter = TerminalPrompter;
    let config = Config::resolve(options, &mut prompter)?;
    let client = GitHubClient::new(config.credentials.clone())?;
    ghsum::run::run_summary(&client, &config, &mut prompter, &mut std::io::stdout()).await
}
