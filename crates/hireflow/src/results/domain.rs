use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for interview records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterviewId(pub String);

/// Lifecycle state of an interview. Only `Completed` records ever contribute
/// to comparative results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Assigned,
    InProgress,
    Completed,
}

impl InterviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            InterviewStatus::Assigned => "assigned",
            InterviewStatus::InProgress => "in_progress",
            InterviewStatus::Completed => "completed",
        }
    }
}

/// Candidate identity as captured by the applicant tracking system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIdentity {
    pub name: String,
    pub email: String,
}

/// One interviewer's answer for a single focus area.
///
/// The rating is a 0-100 integer. The upstream system stores "not rated" as
/// zero, so zero carries both meanings: `is_rated` drives display badges,
/// while scoring counts the value as a literal 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusAreaResponse {
    pub focus_area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(deserialize_with = "clamp_rating")]
    pub rating: u8,
}

impl FocusAreaResponse {
    pub fn is_rated(&self) -> bool {
        self.rating > 0
    }

    /// Rating bounded into [0, 100] regardless of what the source delivered.
    pub fn clamped_rating(&self) -> u8 {
        self.rating.min(100)
    }
}

fn clamp_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, 100) as u8)
}

/// A single interview as delivered by the interview record source. Treated as
/// immutable input; assignment and submission happen upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub id: InterviewId,
    pub candidate: CandidateIdentity,
    pub job_id: String,
    pub job_title: String,
    pub template_name: String,
    pub interviewer_name: String,
    pub status: InterviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub responses: Vec<FocusAreaResponse>,
}

/// Entry returned by the job directory collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub job_id: String,
    pub title: String,
}

/// Canonical focus-area titles per job, plus the jobs whose registry fetch
/// failed and were degraded to an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusAreaCatalog {
    sets: BTreeMap<String, Vec<String>>,
    degraded: BTreeSet<String>,
}

impl FocusAreaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job's canonical titles, deduplicating while keeping the
    /// registry's order.
    pub fn insert(&mut self, job_id: impl Into<String>, titles: Vec<String>) {
        let mut seen = BTreeSet::new();
        let deduped = titles
            .into_iter()
            .filter(|title| seen.insert(title.clone()))
            .collect();
        self.sets.insert(job_id.into(), deduped);
    }

    /// Record a job whose focus-area fetch failed. Scoring sees an empty
    /// canonical set for it.
    pub fn mark_degraded(&mut self, job_id: impl Into<String>) {
        self.degraded.insert(job_id.into());
    }

    /// Canonical titles for a job, empty for unknown or degraded jobs.
    pub fn canonical_for(&self, job_id: &str) -> &[String] {
        self.sets.get(job_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degraded_jobs(&self) -> impl Iterator<Item = &str> {
        self.degraded.iter().map(String::as_str)
    }

    pub fn is_degraded(&self, job_id: &str) -> bool {
        self.degraded.contains(job_id)
    }
}

/// Mean score over one canonical focus area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusAreaScore {
    pub focus_area: String,
    pub score: f32,
    pub response_count: usize,
}

/// Comparative result merging every completed interview for one candidate on
/// one job. Ephemeral: recomputed wholesale on each refresh, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateJobResult {
    pub candidate_name: String,
    pub candidate_email: String,
    pub job_id: String,
    pub job_title: String,
    pub interviews: Vec<InterviewRecord>,
    /// Every response grouped under its literal title, in the order the
    /// contributing interviews were processed. Titles outside the job's
    /// canonical set stay here for display but never reach scoring.
    pub responses_by_focus_area: BTreeMap<String, Vec<FocusAreaResponse>>,
    /// Per-area scores in canonical catalog order.
    pub area_scores: Vec<FocusAreaScore>,
    pub overall_rating: u8,
}

impl CandidateJobResult {
    /// Most recent completion timestamp across the contributing interviews.
    pub fn latest_completion(&self) -> Option<DateTime<Utc>> {
        self.interviews
            .iter()
            .filter_map(|interview| interview.completed_at)
            .max()
    }

    pub(crate) fn template_names(&self) -> String {
        self.interviews
            .iter()
            .map(|interview| interview.template_name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn interviewer_names(&self) -> String {
        self.interviews
            .iter()
            .map(|interview| interview.interviewer_name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
