use std::io::Read;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::domain::{
    CandidateIdentity, FocusAreaResponse, InterviewId, InterviewRecord, InterviewStatus,
};

/// Parse an ATS interview export into interview records.
///
/// One row per interview; responses travel in a single cell as
/// `Title:rating` pairs separated by `;` (feedback, when present, follows the
/// rating after a `|`). Unknown statuses fall back to `assigned` and
/// unparsable timestamps are dropped rather than rejected, matching how the
/// rest of the engine tolerates malformed input.
pub fn parse_interview_export<R: Read>(reader: R) -> Result<Vec<InterviewRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<ExportRow>() {
        let row = row?;
        records.push(row.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ExportRow {
    #[serde(rename = "Interview ID")]
    interview_id: String,
    #[serde(rename = "Candidate Name")]
    candidate_name: String,
    #[serde(rename = "Candidate Email")]
    candidate_email: String,
    #[serde(rename = "Job ID")]
    job_id: String,
    #[serde(rename = "Job Title")]
    job_title: String,
    #[serde(rename = "Template")]
    template: String,
    #[serde(rename = "Interviewer")]
    interviewer: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Completed At", default, deserialize_with = "empty_string_as_none")]
    completed_at: Option<String>,
    #[serde(rename = "Responses", default, deserialize_with = "empty_string_as_none")]
    responses: Option<String>,
}

impl ExportRow {
    fn into_record(self) -> InterviewRecord {
        let status = parse_status(&self.status);
        let completed_at = self
            .completed_at
            .as_deref()
            .and_then(parse_datetime)
            .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));

        InterviewRecord {
            id: InterviewId(self.interview_id),
            candidate: CandidateIdentity {
                name: self.candidate_name,
                email: self.candidate_email,
            },
            job_id: self.job_id,
            job_title: self.job_title,
            template_name: self.template,
            interviewer_name: self.interviewer,
            status,
            completed_at,
            responses: self
                .responses
                .as_deref()
                .map(parse_responses)
                .unwrap_or_default(),
        }
    }
}

fn parse_status(raw: &str) -> InterviewStatus {
    match raw.trim().to_ascii_lowercase().as_str() {
        "completed" => InterviewStatus::Completed,
        "in_progress" | "in progress" => InterviewStatus::InProgress,
        _ => InterviewStatus::Assigned,
    }
}

fn parse_responses(raw: &str) -> Vec<FocusAreaResponse> {
    raw.split(';')
        .filter_map(|pair| {
            let pair = pair.trim();
            if pair.is_empty() {
                return None;
            }
            let (title, rest) = pair.split_once(':')?;
            let (rating_raw, feedback) = match rest.split_once('|') {
                Some((rating, feedback)) => (rating, Some(feedback.trim().to_string())),
                None => (rest, None),
            };
            let rating = rating_raw
                .trim()
                .parse::<i64>()
                .unwrap_or(0)
                .clamp(0, 100) as u8;
            Some(FocusAreaResponse {
                focus_area: title.trim().to_string(),
                feedback: feedback.filter(|text| !text.is_empty()),
                rating,
            })
        })
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}
