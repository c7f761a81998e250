pub use crate::base::{
    config::{MergeConflictConfig, OpenPrsConfig, WebhookConfig},
    error::{DeliveryError, NotifyError},
    types::{MergeFailureContext, PullRequestRecord, Res, Void},
};
pub use crate::service::webhook::{DeliveryReceipt, GenericWebhookClient, MessageBlock, NotificationMessage, WebhookClient};
pub use anyhow::anyhow;
pub use tracing::{debug, error, info, instrument, warn};
