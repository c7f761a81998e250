//! Binary entry point for `open-prs`.
//!
//! Reads the open PR list produced earlier in the CI job, annotates each PR
//! with how long it has been open, and posts the report to Slack.

use chrono::Utc;
use clap::Parser;
use pr_notify::{base::logging, prelude::*, report::open_prs};

/// Post today's open pull requests, with their age, to a Slack channel.
///
/// Requires `SLACK_WEBHOOK_URL` and `REPO_NAME`, either in the environment
/// or in the config file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, `.hidden/config.toml` is used when it exists.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// JSON file listing the open PRs (defaults to `prs.json`).
    #[arg(short, long)]
    file: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Void {
    let args = Args::parse();

    logging::init(args.verbose);

    let mut config = OpenPrsConfig::load(args.config.as_deref()).inspect_err(|e| error!("{e}"))?;

    if let Some(file) = args.file {
        config.prs_file = file;
    }

    let webhook = WebhookClient::slack(&config.webhook()).inspect_err(|e| error!("{e}"))?;

    open_prs::run(&config, &webhook, Utc::now()).await?;

    Ok(())
}
