use std::future::Future;

use serde::{Deserialize, Serialize};

use super::domain::{InterviewRecord, JobSummary};

/// Which slice of the interview data a caller may see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewScope {
    #[default]
    All,
    AssignedByCurrentUser,
}

/// Collaborator failures. Always retryable from the caller's side; the
/// engine itself never retries.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
    #[error("collaborator rejected the request: {0}")]
    Rejected(String),
}

/// Source of completed interview records (the surrounding application fetches
/// these over HTTP; this engine only consumes the delivered set).
pub trait InterviewSource: Send + Sync {
    fn completed_interviews(&self, scope: InterviewScope)
        -> Result<Vec<InterviewRecord>, FetchError>;
}

/// Directory of jobs the caller can filter by.
pub trait JobDirectory: Send + Sync {
    fn list_jobs(&self) -> Result<Vec<JobSummary>, FetchError>;
}

/// Registry of canonical focus-area titles per job. Async so the refresh can
/// fan one fetch out per distinct job and join them before scoring.
pub trait FocusAreaRegistry: Send + Sync {
    fn focus_areas(
        &self,
        job_id: &str,
    ) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}
