//! Core components, types, and utilities shared by both notifiers.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Error kinds and result aliases.
//! - Logging setup and elapsed-time rendering.

pub mod config;
pub mod error;
pub mod humanize;
pub mod logging;
pub mod types;
