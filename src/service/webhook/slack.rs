//! Slack incoming-webhook integration.
//!
//! Slack answers an accepted post with `200 ok` and a rejected one with a
//! 4xx status whose body is the reason code (`invalid_auth`, `no_service`,
//! `invalid_payload`, ...). That body becomes the `DeliveryError` reason.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::base::{
    config::WebhookConfig,
    error::{DeliveryError, NotifyError, WEBHOOK_URL_NOT_CONFIGURED},
};

use super::{DeliveryReceipt, GenericWebhookClient, NotificationMessage, WebhookClient};

// Extra methods on `WebhookClient` applied by the slack implementation.

impl WebhookClient {
    /// Creates a new Slack incoming-webhook client.
    pub fn slack(config: &WebhookConfig) -> Result<Self, NotifyError> {
        let client = SlackWebhookClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Structs.

/// Slack webhook client implementation.
#[derive(Clone)]
struct SlackWebhookClient {
    url: String,
    http: reqwest::Client,
}

impl SlackWebhookClient {
    /// Create a new Slack webhook client.
    #[instrument(name = "SlackWebhookClient::new", skip_all)]
    fn new(config: &WebhookConfig) -> Result<Self, NotifyError> {
        if config.url.trim().is_empty() {
            warn!("Slack webhook URL is empty; sends will fail.");
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NotifyError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { url: config.url.clone(), http })
    }
}

#[async_trait]
impl GenericWebhookClient for SlackWebhookClient {
    #[instrument(skip_all, fields(blocks = message.blocks.len()))]
    async fn send(&self, message: &NotificationMessage) -> Result<DeliveryReceipt, DeliveryError> {
        if self.url.trim().is_empty() {
            return Err(DeliveryError::new(None, WEBHOOK_URL_NOT_CONFIGURED));
        }

        let response = self.http.post(&self.url).json(message).send().await.map_err(|e| DeliveryError::new(None, e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| DeliveryError::new(Some(status.as_u16()), e.to_string()))?;

        debug!(status = status.as_u16(), body = %body, "Slack webhook responded.");

        if !status.is_success() {
            let reason = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown_error").to_string()
            } else {
                body.trim().to_string()
            };

            return Err(DeliveryError::new(Some(status.as_u16()), reason));
        }

        Ok(DeliveryReceipt { status: status.as_u16(), body })
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::service::webhook::MessageBlock;

    fn message() -> NotificationMessage {
        NotificationMessage::new("Open PRs").with_block(MessageBlock::markdown("hello"))
    }

    fn client(url: String) -> WebhookClient {
        WebhookClient::slack(&WebhookConfig { url, timeout_secs: 5 }).unwrap()
    }

    #[tokio::test]
    async fn posts_payload_and_returns_receipt() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/services/T000/B000/XXX")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "text": "Open PRs",
                "blocks": [{ "type": "section", "text": { "type": "mrkdwn", "text": "hello" } }]
            })))
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let receipt = client(format!("{}/services/T000/B000/XXX", server.url())).send(&message()).await.unwrap();

        assert_eq!(receipt, DeliveryReceipt { status: 200, body: "ok".to_string() });
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejection_reports_endpoint_reason() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/hook").with_status(403).with_body("invalid_auth").create_async().await;

        let err = client(format!("{}/hook", server.url())).send(&message()).await.unwrap_err();

        assert_eq!(err, DeliveryError::new(Some(403), "invalid_auth"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejection_without_body_uses_status_reason() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("POST", "/hook").with_status(404).create_async().await;

        let err = client(format!("{}/hook", server.url())).send(&message()).await.unwrap_err();

        assert_eq!(err, DeliveryError::new(Some(404), "Not Found"));
    }

    #[tokio::test]
    async fn empty_url_fails_without_network() {
        let err = client(String::new()).send(&message()).await.unwrap_err();

        assert_eq!(err, DeliveryError::new(None, WEBHOOK_URL_NOT_CONFIGURED));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let err = client("http://127.0.0.1:9/hook".to_string()).send(&message()).await.unwrap_err();

        assert_eq!(err.status, None);
        assert!(!err.reason.is_empty());
    }
}
