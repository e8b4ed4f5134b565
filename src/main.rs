// src/main.rs
// =============================================================================
// This is the entry point of m-check.
//
// What happens here:
// 1. Parse command-line arguments and set up logging
// 2. Unless --local, walk the repository's docs and download the markdown
// 3. Extract links from every downloaded .md file
// 4. Check every link concurrently and wait for all of them
// 5. Append the findings to output.txt and print them
// 6. Exit with 0 (every link answered), 1 (broken links) or 2 (error)
// =============================================================================

mod checker;
mod cli;
mod directory;
mod error;
mod github;
mod logging;

use anyhow::Result;
use checker::{CheckReport, LinkChecker, LinkStatus};
use clap::Parser;
use cli::Cli;
use github::GitHubClient;
use log::info;
use std::path::Path;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every link answered
//   Ok(1) = at least one Broken Link
//   Err   = the run could not complete
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    let dir = directory::report_dir(&cli.base_path, &cli.owner, &cli.repo);

    if !cli.local {
        info!("Finding repository {}/{}", cli.owner, cli.repo);
        let github = GitHubClient::new(&cli.owner, &cli.repo, cli.token.clone())?;
        let files = github.list_markdown_files(&cli.remote_path).await?;

        info!("Saving all documentation found ({} file(s))", files.len());
        directory::create_dir(&dir).await?;
        github.download_all(&cli.remote_path, &files, &dir).await?;
    }

    let checker = LinkChecker::new(&cli.checker_config())?;
    let report = check_directory(&dir, &checker).await?;

    print_results(&report, cli.json)?;

    if report.broken_count() > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Extracts the links of every markdown file in `dir`, checks them all and
/// appends the findings to `dir/output.txt`.
async fn check_directory(dir: &Path, link_checker: &LinkChecker) -> error::Result<CheckReport> {
    info!("Gathering filenames");
    let names = directory::file_names(dir).await?;
    let links = checker::parse_batch(dir, &names).await?;

    info!("Checking connectivity of {} markdown link(s)", links.len());
    let report = link_checker.check_batch(links).await;

    let path = directory::append_report(dir, report.lines()).await?;
    info!("Findings are saved to {}", path.display());

    Ok(report)
}

fn print_results(report: &CheckReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_table(report);
    }
    Ok(())
}

fn print_table(report: &CheckReport) {
    println!("{:<80} {:<15}", "URL", "OUTCOME");
    println!("{}", "=".repeat(96));

    for outcome in report {
        // Truncate on a char boundary; links may hold non-ASCII text.
        let url_display = if outcome.url.chars().count() > 77 {
            let head: String = outcome.url.chars().take(77).collect();
            format!("{head}...")
        } else {
            outcome.url.clone()
        };

        println!("{:<80} {:<15}", url_display, format_status(&outcome.status));
    }

    println!();
    println!("Summary:");
    println!("   Responded: {}", report.responded_count());
    println!("   Broken:    {}", report.broken_count());
    println!("   Total:     {}", report.len());
}

fn format_status(status: &LinkStatus) -> String {
    match status {
        LinkStatus::Responded { code } if (200..300).contains(code) => format!("✅ {code}"),
        LinkStatus::Responded { code } => format!("⚠️  {code}"),
        LinkStatus::Broken => "❌ Broken Link".to_string(),
    }
}
