use std::collections::BTreeMap;
use std::collections::HashMap;

use super::domain::{FocusAreaResponse, InterviewRecord, InterviewStatus};

/// One (candidate email, job id) group before scoring.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CandidateGroup {
    pub(crate) candidate_name: String,
    pub(crate) candidate_email: String,
    pub(crate) job_id: String,
    pub(crate) job_title: String,
    pub(crate) interviews: Vec<InterviewRecord>,
    pub(crate) responses_by_focus_area: BTreeMap<String, Vec<FocusAreaResponse>>,
}

/// Group completed interviews by (candidate email, job id).
///
/// Pure over its input: non-completed records are dropped, keys use the raw
/// strings with no normalization, and groups come out in first-seen order.
/// Responses are appended under their literal title in the order interviews
/// are processed, so two interviews rating the same area yield two entries.
pub(crate) fn group_completed(records: &[InterviewRecord]) -> Vec<CandidateGroup> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut groups: Vec<CandidateGroup> = Vec::new();

    for record in records {
        if record.status != InterviewStatus::Completed {
            continue;
        }

        let key = (record.candidate.email.clone(), record.job_id.clone());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(CandidateGroup {
                candidate_name: record.candidate.name.clone(),
                candidate_email: record.candidate.email.clone(),
                job_id: record.job_id.clone(),
                job_title: record.job_title.clone(),
                interviews: Vec::new(),
                responses_by_focus_area: BTreeMap::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.interviews.push(record.clone());
        for response in &record.responses {
            group
                .responses_by_focus_area
                .entry(response.focus_area.clone())
                .or_default()
                .push(response.clone());
        }
    }

    groups
}
