// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the struct below is the whole CLI, and clap
// generates the parsing, --help and --version from it.
// =============================================================================

use crate::checker::{CheckerConfig, DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "m-check",
    version,
    about = "Checks the links in a GitHub repository's markdown documentation",
    long_about = "m-check downloads the markdown documentation of a GitHub repository, \
                  extracts every http(s) link and checks that each one answers. \
                  Findings are appended to output.txt next to the downloaded files.",
    after_help = "Examples:\n  \
                  m-check -o jwhitt3r -r m-check -t <token>\n  \
                  m-check -o jwhitt3r -r m-check -l\n  \
                  m-check -o jwhitt3r -r m-check -b ./tmp\n  \
                  m-check -o jwhitt3r -r test_repo -p documentation"
)]
pub struct Cli {
    /// Owner of the repository to search
    #[arg(short, long)]
    pub owner: String,

    /// Repository to search in
    #[arg(short, long)]
    pub repo: String,

    /// GitHub personal token, for a higher API rate limit
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// The documentation is already downloaded; only scan the local copy
    #[arg(short, long)]
    pub local: bool,

    /// Where to save the documentation and output.txt
    #[arg(short, long, default_value = "./docs")]
    pub base_path: PathBuf,

    /// Documentation directory inside the repository
    #[arg(short = 'p', long, default_value = "docs")]
    pub remote_path: String,

    /// Per-link request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Maximum number of links checked at the same time
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Print results as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            timeout: Duration::from_secs(self.timeout),
            max_concurrency: self.max_concurrency,
            ..CheckerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["m-check", "-o", "jwhitt3r", "-r", "m-check"]).unwrap();
        assert_eq!(cli.owner, "jwhitt3r");
        assert_eq!(cli.repo, "m-check");
        assert!(!cli.local);
        assert_eq!(cli.base_path, PathBuf::from("./docs"));
        assert_eq!(cli.remote_path, "docs");

        let config = cli.checker_config();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.max_concurrency, DEFAULT_MAX_CONCURRENCY);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "m-check", "-o", "o", "-r", "r", "-l", "-b", "./tmp", "-p", "documentation",
            "--timeout", "1", "--max-concurrency", "4", "--json", "-vv",
        ])
        .unwrap();
        assert!(cli.local);
        assert!(cli.json);
        assert_eq!(cli.base_path, PathBuf::from("./tmp"));
        assert_eq!(cli.remote_path, "documentation");
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.checker_config().timeout, Duration::from_secs(1));
        assert_eq!(cli.checker_config().max_concurrency, 4);
    }

    #[test]
    fn test_owner_and_repo_are_required() {
        assert!(Cli::try_parse_from(["m-check", "-o", "o"]).is_err());
        assert!(Cli::try_parse_from(["m-check", "-r", "r"]).is_err());
    }
}
