//! Library root for `pr-notify`.
//!
//! Two CI notification utilities that post to a Slack incoming webhook:
//! - `open-prs` reports every open pull request along with how long it has been open
//! - `merge-conflict-notify` alerts a channel when merging main into a branch fails
//!
//! Configuration and the webhook client are built once at process entry and
//! passed into the report operations, so the transport can be swapped for a
//! fake in tests.

pub mod base;
pub mod prelude;
pub mod report;
pub mod service;
