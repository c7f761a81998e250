//! The two notification pipelines.
//!
//! - `open_prs`: annotate open pull requests with their age and post a summary.
//! - `merge_conflict`: alert when merging the default branch into a branch fails.
//!
//! Both build one message and hand it to a `WebhookClient` exactly once.

pub mod merge_conflict;
pub mod open_prs;

use tracing::{error, info};

use crate::{
    base::error::NotifyError,
    service::webhook::{DeliveryReceipt, NotificationMessage, WebhookClient},
};

/// Header prefix shared by every alert: pings the whole channel.
pub(crate) const ALERT_HEADER: &str = ":alert: :wave: Hi there! <!channel>";

/// Send `message` once, logging the outcome.
async fn deliver(webhook: &WebhookClient, message: &NotificationMessage) -> Result<DeliveryReceipt, NotifyError> {
    match webhook.send(message).await {
        Ok(receipt) => {
            info!(status = receipt.status, body = %receipt.body, "Webhook accepted the message.");
            Ok(receipt)
        }
        Err(err) => {
            error!(status = ?err.status, "Webhook rejected the message: {}", err.reason);
            Err(err.into())
        }
    }
}
