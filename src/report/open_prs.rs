//! Open pull request age report.

use std::{fs, path::Path};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::{
    base::{config::OpenPrsConfig, error::NotifyError, humanize::natural_delta, types::PullRequestRecord},
    service::webhook::{DeliveryReceipt, MessageBlock, NotificationMessage, WebhookClient, message::escape_mrkdwn},
};

use super::{ALERT_HEADER, deliver};

/// Timestamp layout of `createdAt`, always UTC.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Notification preview text.
pub const SUMMARY_TEXT: &str = "Open PRs";

/// One element of the input array; extra fields are ignored.
#[derive(Debug, Deserialize)]
struct RawPullRequest {
    title: String,
    url: String,
    #[serde(rename = "createdAt")]
    created_at: String,
}

/// Read the PR list at `path` and annotate each entry with its age relative to `now`.
///
/// Order is preserved. A `createdAt` at or after `now` is valid and renders as "a moment".
#[instrument(skip(now))]
pub fn load_and_annotate(path: &Path, now: DateTime<Utc>) -> Result<Vec<PullRequestRecord>, NotifyError> {
    let result = fs::read_to_string(path)
        .map_err(|e| format!("failed to read file: {e}"))
        .and_then(|contents| annotate(&contents, now))
        .map_err(|reason| NotifyError::malformed(path, reason));

    match &result {
        Ok(records) => info!(count = records.len(), "Loaded open PRs."),
        Err(err) => error!("{err}"),
    }

    result
}

fn annotate(contents: &str, now: DateTime<Utc>) -> Result<Vec<PullRequestRecord>, String> {
    let raw: Vec<RawPullRequest> = serde_json::from_str(contents).map_err(|e| e.to_string())?;

    raw.into_iter()
        .enumerate()
        .map(|(index, pr)| {
            let created_at = parse_created_at(&pr.created_at).map_err(|e| format!("record {index}: invalid `createdAt` {:?}: {e}", pr.created_at))?;

            Ok(PullRequestRecord {
                title: pr.title,
                url: pr.url,
                created_at,
                open_for: natural_delta(now - created_at),
            })
        })
        .collect()
}

/// Parse a `YYYY-MM-DDTHH:MM:SSZ` timestamp as a UTC instant.
pub fn parse_created_at(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    Ok(NaiveDateTime::parse_from_str(value, CREATED_AT_FORMAT)?.and_utc())
}

/// Build the report: a header naming `repo_name`, then one block per PR.
pub fn build_open_pr_message(records: &[PullRequestRecord], repo_name: &str) -> NotificationMessage {
    let header = MessageBlock::markdown(format!("{ALERT_HEADER} Today's Open PRs in {repo_name}:"));

    records.iter().fold(NotificationMessage::new(SUMMARY_TEXT).with_block(header), |message, pr| {
        message.with_block(MessageBlock::markdown(format!("<{}|{}> \n Been open for {}", pr.url, escape_mrkdwn(&pr.title), pr.open_for)))
    })
}

/// Post the open PR report for `repo_name`. An empty list still sends the header.
#[instrument(skip(webhook, records), fields(count = records.len()))]
pub async fn post_open_pr_summary(webhook: &WebhookClient, records: &[PullRequestRecord], repo_name: &str) -> Result<DeliveryReceipt, NotifyError> {
    let message = build_open_pr_message(records, repo_name);
    deliver(webhook, &message).await
}

/// Full reporter run: load the configured file, then post the summary.
pub async fn run(config: &OpenPrsConfig, webhook: &WebhookClient, now: DateTime<Utc>) -> Result<DeliveryReceipt, NotifyError> {
    let records = load_and_annotate(&config.prs_file, now)?;
    post_open_pr_summary(webhook, &records, &config.repo_name).await
}
