//! Merge-conflict alert.

use tracing::instrument;

use crate::{
    base::{error::NotifyError, types::MergeFailureContext},
    service::webhook::{DeliveryReceipt, MessageBlock, NotificationMessage, WebhookClient},
};

use super::{ALERT_HEADER, deliver};

/// Notification preview text.
pub const SUMMARY_TEXT: &str = "Workflow Failure";

/// Stand-in for a missing branch, run link, or repo name.
pub const UNKNOWN: &str = "unknown";

/// Branch named by `ref_name`: its last `/` segment only.
///
/// `refs/heads/release/1.2` yields `1.2`. A missing or empty ref yields `"unknown"`.
pub fn branch_name(ref_name: Option<&str>) -> String {
    ref_name.and_then(|r| r.rsplit('/').next()).filter(|s| !s.is_empty()).unwrap_or(UNKNOWN).to_string()
}

impl MergeFailureContext {
    pub fn branch_name(&self) -> String {
        branch_name(self.ref_name.as_deref())
    }
}

/// Build the three-block alert for a failed merge of main into the context's branch.
pub fn build_merge_failure_message(context: &MergeFailureContext) -> NotificationMessage {
    let run_link = context.run_link.as_deref().filter(|s| !s.is_empty()).unwrap_or(UNKNOWN);

    NotificationMessage::new(SUMMARY_TEXT)
        .with_block(MessageBlock::markdown(ALERT_HEADER))
        .with_block(MessageBlock::markdown(format!("The workflow {} in {} has failed.", context.workflow_name, context.repo_name)))
        .with_block(MessageBlock::markdown(format!(
            "The workflow attempted to merge main with {} and has failed. Check {run_link} to fix.",
            context.branch_name()
        )))
}

/// Post the merge-conflict alert.
#[instrument(skip(webhook))]
pub async fn notify_merge_failure(webhook: &WebhookClient, context: &MergeFailureContext) -> Result<DeliveryReceipt, NotifyError> {
    let message = build_merge_failure_message(context);
    deliver(webhook, &message).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(ref_name: Option<&str>, run_link: Option<&str>) -> MergeFailureContext {
        MergeFailureContext {
            workflow_name: "merge-check".to_string(),
            ref_name: ref_name.map(str::to_string),
            run_link: run_link.map(str::to_string),
            repo_name: "test-repo".to_string(),
        }
    }

    #[test]
    fn branch_is_last_ref_segment() {
        assert_eq!(branch_name(Some("refs/heads/feature")), "feature");
        assert_eq!(branch_name(Some("refs/heads/release/1.2")), "1.2");
        assert_eq!(branch_name(Some("main")), "main");
    }

    #[test]
    fn missing_branch_is_unknown() {
        assert_eq!(branch_name(None), "unknown");
        assert_eq!(branch_name(Some("")), "unknown");
        assert_eq!(branch_name(Some("refs/heads/")), "unknown");
    }

    #[test]
    fn message_names_workflow_repo_branch_and_run() {
        let message = build_merge_failure_message(&context(Some("refs/heads/feature"), Some("http://eg.com/run/123")));

        assert_eq!(message.text, "Workflow Failure");
        let texts: Vec<_> = message.blocks.iter().map(MessageBlock::text).collect();
        assert_eq!(
            texts,
            [
                ":alert: :wave: Hi there! <!channel>",
                "The workflow merge-check in test-repo has failed.",
                "The workflow attempted to merge main with feature and has failed. Check http://eg.com/run/123 to fix.",
            ]
        );
    }

    #[test]
    fn missing_ref_and_link_still_build() {
        let message = build_merge_failure_message(&context(None, None));

        assert_eq!(message.blocks.len(), 3);
        assert_eq!(message.blocks[2].text(), "The workflow attempted to merge main with unknown and has failed. Check unknown to fix.");
    }
}
