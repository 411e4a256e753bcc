use serde::{Deserialize, Serialize};

use super::aggregate::group_completed;
use super::domain::{CandidateJobResult, FocusAreaCatalog, InterviewRecord};
use super::scoring::score_group;

/// One immutable pass over the interview data. A refresh replaces the whole
/// snapshot; nothing is merged incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSnapshot {
    pub results: Vec<CandidateJobResult>,
    /// Jobs whose focus-area fetch failed and were scored against an empty
    /// canonical set.
    pub degraded_jobs: Vec<String>,
}

impl ResultSnapshot {
    pub fn partial_failure(&self) -> bool {
        !self.degraded_jobs.is_empty()
    }
}

/// Aggregate and score the full interview set against the catalog.
pub fn compute(interviews: &[InterviewRecord], catalog: &FocusAreaCatalog) -> ResultSnapshot {
    let results = group_completed(interviews)
        .into_iter()
        .map(|group| {
            let canonical = catalog.canonical_for(&group.job_id);
            let (area_scores, overall_rating) = score_group(&group, canonical);
            CandidateJobResult {
                candidate_name: group.candidate_name,
                candidate_email: group.candidate_email,
                job_id: group.job_id,
                job_title: group.job_title,
                interviews: group.interviews,
                responses_by_focus_area: group.responses_by_focus_area,
                area_scores,
                overall_rating,
            }
        })
        .collect();

    ResultSnapshot {
        results,
        degraded_jobs: catalog.degraded_jobs().map(str::to_string).collect(),
    }
}
