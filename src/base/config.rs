//! Load configuration via `config` crate with env-override support.
//!
//! Environment variables are read without a prefix, so `SLACK_WEBHOOK_URL`
//! maps to `slack_webhook_url`. A TOML file (explicit, or `.hidden/config.toml`
//! when present) supplies values that the environment does not.

use std::path::{Path, PathBuf};

use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;

use crate::base::error::NotifyError;

/// Config file picked up when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = ".hidden/config.toml";

/// Environment snapshot used in place of the process environment.
pub type EnvMap = config::Map<String, String>;

/// Default input file for the PR-age reporter.
fn default_prs_file() -> PathBuf {
    PathBuf::from("prs.json")
}

/// Default webhook request timeout, in seconds.
fn default_webhook_timeout_secs() -> u64 {
    30
}

/// Connection settings for the chat webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: String,
    pub timeout_secs: u64,
}

/// Configuration for the `open-prs` reporter.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OpenPrsConfig {
    /// Slack incoming webhook URL (`SLACK_WEBHOOK_URL`). Required.
    pub slack_webhook_url: String,
    /// Repository named in the report header (`REPO_NAME`). Required.
    pub repo_name: String,
    /// JSON file listing the open PRs (`PRS_FILE`).
    #[serde(default = "default_prs_file")]
    pub prs_file: PathBuf,
    /// Webhook request timeout (`WEBHOOK_TIMEOUT_SECS`).
    #[serde(default = "default_webhook_timeout_secs")]
    pub webhook_timeout_secs: u64,
}

/// Configuration for the `merge-conflict-notify` alert.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MergeConflictConfig {
    /// Slack incoming webhook URL (`SLACK_WEBHOOK_URL`).
    ///
    /// Empty when unset; the webhook client then refuses to send.
    #[serde(default)]
    pub slack_webhook_url: String,
    /// Repository named in the alert (`REPO_NAME`).
    #[serde(default)]
    pub repo_name: Option<String>,
    /// Webhook request timeout (`WEBHOOK_TIMEOUT_SECS`).
    #[serde(default = "default_webhook_timeout_secs")]
    pub webhook_timeout_secs: u64,
}

impl OpenPrsConfig {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, NotifyError> {
        Self::load_from(explicit_path, None)
    }

    /// Load using `env` instead of the process environment when given.
    pub fn load_from(explicit_path: Option<&Path>, env: Option<EnvMap>) -> Result<Self, NotifyError> {
        let result: Self = builder(explicit_path, env).build()?.try_deserialize()?;

        if result.webhook_timeout_secs == 0 {
            return Err(NotifyError::Configuration("Webhook timeout must be at least one second.".to_string()));
        }

        Ok(result)
    }

    pub fn webhook(&self) -> WebhookConfig {
        WebhookConfig {
            url: self.slack_webhook_url.clone(),
            timeout_secs: self.webhook_timeout_secs,
        }
    }
}

impl MergeConflictConfig {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, NotifyError> {
        Self::load_from(explicit_path, None)
    }

    /// Load using `env` instead of the process environment when given.
    pub fn load_from(explicit_path: Option<&Path>, env: Option<EnvMap>) -> Result<Self, NotifyError> {
        let result: Self = builder(explicit_path, env).build()?.try_deserialize()?;

        if result.webhook_timeout_secs == 0 {
            return Err(NotifyError::Configuration("Webhook timeout must be at least one second.".to_string()));
        }

        Ok(result)
    }

    pub fn webhook(&self) -> WebhookConfig {
        WebhookConfig {
            url: self.slack_webhook_url.clone(),
            timeout_secs: self.webhook_timeout_secs,
        }
    }
}

fn builder(explicit_path: Option<&Path>, env: Option<EnvMap>) -> ConfigBuilder<DefaultState> {
    let mut cfg = config::Config::builder();

    if let Some(p) = explicit_path {
        cfg = cfg.add_source(config::File::from(p.to_path_buf()));
    } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
        cfg = cfg.add_source(config::File::with_name(DEFAULT_CONFIG_PATH));
    }

    cfg.add_source(config::Environment::default().source(env))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn open_prs_reads_required_vars_and_defaults() {
        let config = OpenPrsConfig::load_from(None, Some(env(&[("SLACK_WEBHOOK_URL", "https://hooks.slack.fake/test123"), ("REPO_NAME", "fake-repo")]))).unwrap();

        assert_eq!(config.slack_webhook_url, "https://hooks.slack.fake/test123");
        assert_eq!(config.repo_name, "fake-repo");
        assert_eq!(config.prs_file, PathBuf::from("prs.json"));
        assert_eq!(config.webhook().timeout_secs, 30);
    }

    #[test]
    fn open_prs_fails_fast_without_repo_name() {
        let err = OpenPrsConfig::load_from(None, Some(env(&[("SLACK_WEBHOOK_URL", "https://hooks.slack.fake/test123")]))).unwrap_err();

        assert!(matches!(err, NotifyError::Configuration(ref msg) if msg.contains("repo_name")), "{err}");
    }

    #[test]
    fn open_prs_fails_fast_without_webhook_url() {
        let err = OpenPrsConfig::load_from(None, Some(env(&[("REPO_NAME", "fake-repo")]))).unwrap_err();

        assert!(matches!(err, NotifyError::Configuration(ref msg) if msg.contains("slack_webhook_url")), "{err}");
    }

    #[test]
    fn open_prs_rejects_zero_timeout() {
        let err = OpenPrsConfig::load_from(
            None,
            Some(env(&[("SLACK_WEBHOOK_URL", "https://hooks.slack.fake/x"), ("REPO_NAME", "r"), ("WEBHOOK_TIMEOUT_SECS", "0")])),
        )
        .unwrap_err();

        assert!(matches!(err, NotifyError::Configuration(_)));
    }

    #[test]
    fn merge_conflict_accepts_missing_webhook_url() {
        let config = MergeConflictConfig::load_from(None, Some(EnvMap::new())).unwrap();

        assert_eq!(config.slack_webhook_url, "");
        assert_eq!(config.repo_name, None);
    }

    #[test]
    fn environment_overrides_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "slack_webhook_url = \"https://hooks.slack.fake/from-file\"").unwrap();
        writeln!(file, "repo_name = \"file-repo\"").unwrap();
        writeln!(file, "prs_file = \"open.json\"").unwrap();

        let config = OpenPrsConfig::load_from(Some(file.path()), Some(env(&[("REPO_NAME", "env-repo")]))).unwrap();

        assert_eq!(config.slack_webhook_url, "https://hooks.slack.fake/from-file");
        assert_eq!(config.repo_name, "env-repo");
        assert_eq!(config.prs_file, PathBuf::from("open.json"));
    }
}
