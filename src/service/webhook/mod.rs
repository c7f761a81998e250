pub mod message;
pub mod slack;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde::Serialize;

use crate::base::error::DeliveryError;

pub use message::{MessageBlock, NotificationMessage, TextObject};

// Types.

/// Acknowledgment returned by the endpoint for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub body: String,
}

// Traits.

/// Generic webhook trait that clients must implement.
///
/// A client delivers one structured message to a pre-configured chat channel.
/// Implementations perform exactly one attempt; retrying is never their job.
#[async_trait]
pub trait GenericWebhookClient: Send + Sync + 'static {
    /// Deliver `message`, returning the endpoint's acknowledgment.
    ///
    /// Errors carry the endpoint-reported reason (e.g. `invalid_auth`) or the
    /// transport failure text.
    async fn send(&self, message: &NotificationMessage) -> Result<DeliveryReceipt, DeliveryError>;
}

// Structs.

/// Webhook client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct WebhookClient {
    inner: Arc<dyn GenericWebhookClient>,
}

impl Deref for WebhookClient {
    type Target = dyn GenericWebhookClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl WebhookClient {
    pub fn new(inner: Arc<dyn GenericWebhookClient>) -> Self {
        Self { inner }
    }
}
