use chrono::{DateTime, Utc};
use serde::Serialize;

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// A pull request annotated with how long it has been open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestRecord {
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    /// Human-readable elapsed time between `created_at` and the run's `now`.
    pub open_for: String,
}

/// Everything needed to describe a failed merge of the default branch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeFailureContext {
    pub workflow_name: String,
    /// Source-control ref, e.g. `refs/heads/feature`.
    pub ref_name: Option<String>,
    pub run_link: Option<String>,
    pub repo_name: String,
}
