use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::warn;

use super::domain::{FocusAreaCatalog, JobSummary};
use super::snapshot::{compute, ResultSnapshot};
use super::source::{FetchError, FocusAreaRegistry, InterviewScope, InterviewSource, JobDirectory};

/// Facade composing the interview source, job directory, and focus-area
/// registry into whole-snapshot refreshes.
pub struct ResultsService<S, D, R> {
    source: Arc<S>,
    directory: Arc<D>,
    registry: Arc<R>,
}

impl<S, D, R> ResultsService<S, D, R>
where
    S: InterviewSource + 'static,
    D: JobDirectory + 'static,
    R: FocusAreaRegistry + 'static,
{
    pub fn new(source: Arc<S>, directory: Arc<D>, registry: Arc<R>) -> Self {
        Self {
            source,
            directory,
            registry,
        }
    }

    /// Build a fresh snapshot for the given scope.
    ///
    /// Focus-area sets are fetched concurrently, one task per distinct job in
    /// the interview set, and all of them are joined before any scoring. A
    /// failed fetch degrades only its own job: that job scores against an
    /// empty canonical set and is reported through `degraded_jobs`.
    pub async fn refresh(&self, scope: InterviewScope) -> Result<ResultSnapshot, ResultsError> {
        let interviews = self.source.completed_interviews(scope)?;

        let job_ids: BTreeSet<String> = interviews
            .iter()
            .map(|interview| interview.job_id.clone())
            .collect();

        let mut fetches = JoinSet::new();
        for job_id in job_ids {
            let registry = Arc::clone(&self.registry);
            fetches.spawn(async move {
                let outcome = registry.focus_areas(&job_id).await;
                (job_id, outcome)
            });
        }

        let mut catalog = FocusAreaCatalog::new();
        while let Some(joined) = fetches.join_next().await {
            let (job_id, outcome) = joined?;
            match outcome {
                Ok(titles) => catalog.insert(job_id, titles),
                Err(error) => {
                    warn!(%job_id, %error, "focus-area fetch failed; scoring job with empty set");
                    catalog.mark_degraded(job_id);
                }
            }
        }

        Ok(compute(&interviews, &catalog))
    }

    /// Jobs available for filtering.
    pub fn jobs(&self) -> Result<Vec<JobSummary>, ResultsError> {
        Ok(self.directory.list_jobs()?)
    }
}

/// Errors surfaced by a refresh. All of them originate at the collaborator
/// boundary; retrying is the caller's call.
#[derive(Debug, thiserror::Error)]
pub enum ResultsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("focus-area fetch task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
