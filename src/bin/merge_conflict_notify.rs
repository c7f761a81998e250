//! Binary entry point for `merge-conflict-notify`.
//!
//! Invoked by the merge-check workflow when merging main into a branch fails.

use clap::Parser;
use pr_notify::{
    base::logging,
    prelude::*,
    report::merge_conflict::{self, UNKNOWN},
};

/// Alert a Slack channel that merging main into a branch failed.
///
/// Reads `SLACK_WEBHOOK_URL` from the environment or config file. When it is
/// unset the alert cannot be delivered and the command exits non-zero.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Name of the workflow that failed.
    workflow_name: String,
    /// Ref that was being updated, e.g. `refs/heads/feature`.
    ref_name: Option<String>,
    /// Link to the failing workflow run.
    run_link: Option<String>,
    /// Repository named in the alert (falls back to `REPO_NAME`).
    #[arg(long)]
    repo_name: Option<String>,
    /// Override the config file path (optional).
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Void {
    let args = Args::parse();

    logging::init(args.verbose);

    let config = MergeConflictConfig::load(args.config.as_deref()).inspect_err(|e| error!("{e}"))?;
    let webhook = WebhookClient::slack(&config.webhook()).inspect_err(|e| error!("{e}"))?;

    let context = MergeFailureContext {
        workflow_name: args.workflow_name,
        ref_name: args.ref_name,
        run_link: args.run_link,
        repo_name: args.repo_name.or(config.repo_name).unwrap_or_else(|| UNKNOWN.to_string()),
    };

    merge_conflict::notify_merge_failure(&webhook, &context).await?;

    Ok(())
}
