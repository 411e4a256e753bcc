use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::domain::CandidateJobResult;

/// Active filters, combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFilter {
    /// Exact match on job id; `None` passes everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Only completed-derived results exist, so any value other than the
    /// literal `"completed"` empties the view. Inherited from the source
    /// system and preserved as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Case-insensitive substring search over candidate name, email, job
    /// title, and the contributing template and interviewer names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    CandidateName,
    JobTitle,
    OverallRating,
    LatestCompletion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Explicit view inputs; no hidden state survives between applications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub filter: ResultFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
}

/// Filter, search, and sort a scored result list. The sort is stable and
/// single-key: ties keep their pre-sort relative order.
pub fn apply_view(results: &[CandidateJobResult], view: &ViewState) -> Vec<CandidateJobResult> {
    let mut selected: Vec<CandidateJobResult> = results
        .iter()
        .filter(|result| matches_filter(result, &view.filter))
        .cloned()
        .collect();

    if let Some(sort) = view.sort {
        selected.sort_by(|a, b| {
            let ordering = compare_by_key(a, b, sort.key);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    selected
}

fn matches_filter(result: &CandidateJobResult, filter: &ResultFilter) -> bool {
    if let Some(job_id) = &filter.job_id {
        if result.job_id != *job_id {
            return false;
        }
    }

    if let Some(status) = &filter.status {
        if status != "completed" {
            return false;
        }
    }

    if let Some(term) = &filter.search {
        let needle = term.to_lowercase();
        if !needle.is_empty() && !search_haystacks(result).any(|hay| hay.contains(&needle)) {
            return false;
        }
    }

    true
}

fn search_haystacks(result: &CandidateJobResult) -> impl Iterator<Item = String> + '_ {
    [
        result.candidate_name.to_lowercase(),
        result.candidate_email.to_lowercase(),
        result.job_title.to_lowercase(),
        result.template_names().to_lowercase(),
        result.interviewer_names().to_lowercase(),
    ]
    .into_iter()
}

fn compare_by_key(a: &CandidateJobResult, b: &CandidateJobResult, key: SortKey) -> Ordering {
    match key {
        SortKey::CandidateName => case_insensitive(&a.candidate_name, &b.candidate_name),
        SortKey::JobTitle => case_insensitive(&a.job_title, &b.job_title),
        SortKey::OverallRating => a.overall_rating.cmp(&b.overall_rating),
        SortKey::LatestCompletion => a.latest_completion().cmp(&b.latest_completion()),
    }
}

fn case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
