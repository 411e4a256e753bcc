use std::collections::BTreeSet;

use super::domain::{CandidateJobResult, FocusAreaCatalog};

/// Focus-area columns for the current view: the deduplicated, sorted union of
/// canonical sets of the jobs present in the *filtered* result list.
///
/// Scoping to the filtered subset keeps columns of excluded jobs off the
/// table; callers must recompute whenever the filter inputs change.
pub fn project_columns(filtered: &[CandidateJobResult], catalog: &FocusAreaCatalog) -> Vec<String> {
    let job_ids: BTreeSet<&str> = filtered.iter().map(|result| result.job_id.as_str()).collect();

    let mut columns = BTreeSet::new();
    for job_id in job_ids {
        for title in catalog.canonical_for(job_id) {
            columns.insert(title.clone());
        }
    }

    columns.into_iter().collect()
}
