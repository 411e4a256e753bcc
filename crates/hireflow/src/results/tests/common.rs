use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, TimeZone, Utc};

use crate::results::domain::{
    CandidateIdentity, FocusAreaCatalog, FocusAreaResponse, InterviewId, InterviewRecord,
    InterviewStatus, JobSummary,
};
use crate::results::source::{
    FetchError, FocusAreaRegistry, InterviewScope, InterviewSource, JobDirectory,
};

pub(super) fn completed_at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).single().expect("valid timestamp")
}

pub(super) fn response(focus_area: &str, rating: u8) -> FocusAreaResponse {
    FocusAreaResponse {
        focus_area: focus_area.to_string(),
        feedback: None,
        rating,
    }
}

pub(super) struct InterviewSpec<'a> {
    pub(super) id: &'a str,
    pub(super) candidate_name: &'a str,
    pub(super) candidate_email: &'a str,
    pub(super) job_id: &'a str,
    pub(super) job_title: &'a str,
    pub(super) template: &'a str,
    pub(super) interviewer: &'a str,
    pub(super) status: InterviewStatus,
    pub(super) completed_at: Option<DateTime<Utc>>,
    pub(super) responses: Vec<FocusAreaResponse>,
}

impl Default for InterviewSpec<'_> {
    fn default() -> Self {
        InterviewSpec {
            id: "iv-1",
            candidate_name: "Ada Park",
            candidate_email: "ada@example.com",
            job_id: "job-1",
            job_title: "Backend Engineer",
            template: "Technical Screen",
            interviewer: "Sam Lee",
            status: InterviewStatus::Completed,
            completed_at: Some(completed_at(2, 10)),
            responses: Vec::new(),
        }
    }
}

pub(super) fn interview(spec: InterviewSpec<'_>) -> InterviewRecord {
    InterviewRecord {
        id: InterviewId(spec.id.to_string()),
        candidate: CandidateIdentity {
            name: spec.candidate_name.to_string(),
            email: spec.candidate_email.to_string(),
        },
        job_id: spec.job_id.to_string(),
        job_title: spec.job_title.to_string(),
        template_name: spec.template.to_string(),
        interviewer_name: spec.interviewer.to_string(),
        status: spec.status,
        completed_at: spec.completed_at,
        responses: spec.responses,
    }
}

/// Completed interview shorthand used by most scenarios.
pub(super) fn completed(
    id: &str,
    candidate_name: &str,
    candidate_email: &str,
    job_id: &str,
    responses: Vec<FocusAreaResponse>,
) -> InterviewRecord {
    interview(InterviewSpec {
        id,
        candidate_name,
        candidate_email,
        job_id,
        responses,
        ..InterviewSpec::default()
    })
}

pub(super) fn catalog(entries: &[(&str, &[&str])]) -> FocusAreaCatalog {
    let mut catalog = FocusAreaCatalog::new();
    for (job_id, titles) in entries {
        catalog.insert(
            job_id.to_string(),
            titles.iter().map(|title| title.to_string()).collect(),
        );
    }
    catalog
}

#[derive(Default, Clone)]
pub(super) struct StaticInterviewSource {
    pub(super) records: Vec<InterviewRecord>,
    pub(super) fail: bool,
}

impl InterviewSource for StaticInterviewSource {
    fn completed_interviews(
        &self,
        _scope: InterviewScope,
    ) -> Result<Vec<InterviewRecord>, FetchError> {
        if self.fail {
            return Err(FetchError::Unavailable("interview source offline".to_string()));
        }
        Ok(self.records.clone())
    }
}

#[derive(Default, Clone)]
pub(super) struct StaticJobDirectory {
    pub(super) jobs: Vec<JobSummary>,
}

impl JobDirectory for StaticJobDirectory {
    fn list_jobs(&self) -> Result<Vec<JobSummary>, FetchError> {
        Ok(self.jobs.clone())
    }
}

#[derive(Default, Clone)]
pub(super) struct StaticFocusAreaRegistry {
    pub(super) sets: BTreeMap<String, Vec<String>>,
    pub(super) failing: BTreeSet<String>,
}

impl StaticFocusAreaRegistry {
    pub(super) fn with_sets(entries: &[(&str, &[&str])]) -> Self {
        let sets = entries
            .iter()
            .map(|(job_id, titles)| {
                (
                    job_id.to_string(),
                    titles.iter().map(|title| title.to_string()).collect(),
                )
            })
            .collect();
        Self {
            sets,
            failing: BTreeSet::new(),
        }
    }

    pub(super) fn failing_for(mut self, job_id: &str) -> Self {
        self.failing.insert(job_id.to_string());
        self
    }
}

impl FocusAreaRegistry for StaticFocusAreaRegistry {
    async fn focus_areas(&self, job_id: &str) -> Result<Vec<String>, FetchError> {
        if self.failing.contains(job_id) {
            return Err(FetchError::Unavailable(format!(
                "registry offline for {job_id}"
            )));
        }
        Ok(self.sets.get(job_id).cloned().unwrap_or_default())
    }
}
