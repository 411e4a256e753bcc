use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;

use hireflow::results::{
    FetchError, FocusAreaRegistry, InterviewRecord, InterviewScope, InterviewSource, JobDirectory,
    JobSummary,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Interview source backed by a replaceable in-memory snapshot, standing in
/// for the upstream ATS until the HTTP-backed source lands.
#[derive(Default, Clone)]
pub(crate) struct InMemoryInterviewSource {
    records: Arc<Mutex<Vec<InterviewRecord>>>,
}

impl InMemoryInterviewSource {
    pub(crate) fn seeded(records: Vec<InterviewRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl InterviewSource for InMemoryInterviewSource {
    fn completed_interviews(
        &self,
        _scope: InterviewScope,
    ) -> Result<Vec<InterviewRecord>, FetchError> {
        let guard = self.records.lock().expect("interview mutex poisoned");
        Ok(guard.clone())
    }
}

/// Job directory derived from the seeded interview set.
#[derive(Default, Clone)]
pub(crate) struct DerivedJobDirectory {
    jobs: Vec<JobSummary>,
}

impl DerivedJobDirectory {
    pub(crate) fn from_interviews(records: &[InterviewRecord]) -> Self {
        let mut seen = BTreeSet::new();
        let jobs = records
            .iter()
            .filter(|record| seen.insert(record.job_id.clone()))
            .map(|record| JobSummary {
                job_id: record.job_id.clone(),
                title: record.job_title.clone(),
            })
            .collect();
        Self { jobs }
    }
}

impl JobDirectory for DerivedJobDirectory {
    fn list_jobs(&self) -> Result<Vec<JobSummary>, FetchError> {
        Ok(self.jobs.clone())
    }
}

/// Focus-area registry answering from a static per-job table.
#[derive(Default, Clone)]
pub(crate) struct StaticFocusAreaRegistry {
    sets: BTreeMap<String, Vec<String>>,
}

impl StaticFocusAreaRegistry {
    pub(crate) fn new(sets: BTreeMap<String, Vec<String>>) -> Self {
        Self { sets }
    }
}

impl FocusAreaRegistry for StaticFocusAreaRegistry {
    async fn focus_areas(&self, job_id: &str) -> Result<Vec<String>, FetchError> {
        Ok(self.sets.get(job_id).cloned().unwrap_or_default())
    }
}
