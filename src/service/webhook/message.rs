//! Chat message payloads in the Slack incoming-webhook shape.

use serde::Serialize;

/// A text object inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Mrkdwn { text: String },
    PlainText { text: String },
}

impl TextObject {
    pub fn text(&self) -> &str {
        match self {
            Self::Mrkdwn { text } | Self::PlainText { text } => text,
        }
    }
}

/// One visual unit of a message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageBlock {
    Section { text: TextObject },
}

impl MessageBlock {
    /// A section rendered with chat markup.
    pub fn markdown(text: impl Into<String>) -> Self {
        Self::Section {
            text: TextObject::Mrkdwn { text: text.into() },
        }
    }

    /// A section rendered verbatim.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Section {
            text: TextObject::PlainText { text: text.into() },
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Section { text } => text.text(),
        }
    }
}

/// A complete outbound message: preview text plus ordered blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    /// Plain-text summary shown in notifications.
    pub text: String,
    pub blocks: Vec<MessageBlock>,
}

impl NotificationMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), blocks: Vec::new() }
    }

    pub fn with_block(mut self, block: MessageBlock) -> Self {
        self.blocks.push(block);
        self
    }
}

/// Escape the characters mrkdwn treats as control sequences.
pub fn escape_mrkdwn(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
