//! Service integrations for external APIs and clients.
//!
//! The only external collaborator is the chat webhook. The module defines a
//! generic trait plus a concrete Slack implementation, so tests can swap in a
//! fake transport.

pub mod webhook;
