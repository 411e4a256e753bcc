//! End-to-end specifications for the interview-results engine: aggregation,
//! strict-subset scoring, view application, column projection, and the HTTP
//! query surface, exercised through the public facade only.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use hireflow::results::{
    apply_view, compute, project_columns, results_router, CandidateIdentity, FetchError,
    FocusAreaCatalog, FocusAreaRegistry, FocusAreaResponse, InterviewId, InterviewRecord,
    InterviewScope, InterviewSource, InterviewStatus, JobDirectory, JobSummary, ResultFilter,
    ResultsService, SortDirection, SortKey, SortSpec, ViewState,
};

fn response(focus_area: &str, rating: u8) -> FocusAreaResponse {
    FocusAreaResponse {
        focus_area: focus_area.to_string(),
        feedback: None,
        rating,
    }
}

fn completed(
    id: &str,
    name: &str,
    email: &str,
    job_id: &str,
    job_title: &str,
    responses: Vec<FocusAreaResponse>,
) -> InterviewRecord {
    InterviewRecord {
        id: InterviewId(id.to_string()),
        candidate: CandidateIdentity {
            name: name.to_string(),
            email: email.to_string(),
        },
        job_id: job_id.to_string(),
        job_title: job_title.to_string(),
        template_name: "Technical Screen".to_string(),
        interviewer_name: "Sam Lee".to_string(),
        status: InterviewStatus::Completed,
        completed_at: Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).single(),
        responses,
    }
}

struct FixedSource(Vec<InterviewRecord>);

impl InterviewSource for FixedSource {
    fn completed_interviews(
        &self,
        _scope: InterviewScope,
    ) -> Result<Vec<InterviewRecord>, FetchError> {
        Ok(self.0.clone())
    }
}

struct FixedDirectory(Vec<JobSummary>);

impl JobDirectory for FixedDirectory {
    fn list_jobs(&self) -> Result<Vec<JobSummary>, FetchError> {
        Ok(self.0.clone())
    }
}

struct FixedRegistry(BTreeMap<String, Vec<String>>);

impl FocusAreaRegistry for FixedRegistry {
    async fn focus_areas(&self, job_id: &str) -> Result<Vec<String>, FetchError> {
        Ok(self.0.get(job_id).cloned().unwrap_or_default())
    }
}

fn j1_catalog() -> FocusAreaCatalog {
    let mut catalog = FocusAreaCatalog::new();
    catalog.insert(
        "J1".to_string(),
        vec!["Coding".to_string(), "Communication".to_string()],
    );
    catalog
}

#[test]
fn one_interview_with_one_rated_area_scores_forty_overall() {
    let records = vec![completed(
        "iv-1",
        "Candidate A",
        "a@example.com",
        "J1",
        "Backend Engineer",
        vec![response("Coding", 80)],
    )];

    let snapshot = compute(&records, &j1_catalog());
    let result = &snapshot.results[0];

    assert_eq!(result.area_scores[0].score, 80.0);
    assert_eq!(result.area_scores[1].score, 0.0);
    assert_eq!(result.overall_rating, 40);
}

#[test]
fn two_interviews_average_per_area_before_the_overall_mean() {
    let records = vec![
        completed(
            "iv-1",
            "Candidate A",
            "a@example.com",
            "J1",
            "Backend Engineer",
            vec![response("Coding", 80)],
        ),
        completed(
            "iv-2",
            "Candidate A",
            "a@example.com",
            "J1",
            "Backend Engineer",
            vec![response("Coding", 60)],
        ),
    ];

    let snapshot = compute(&records, &j1_catalog());
    assert_eq!(snapshot.results.len(), 1, "one result per (candidate, job)");

    let result = &snapshot.results[0];
    assert_eq!(result.interviews.len(), 2);
    assert_eq!(result.area_scores[0].score, 70.0);
    assert_eq!(result.overall_rating, 35);
}

#[test]
fn search_matches_candidate_name_case_insensitively() {
    let records = vec![
        completed(
            "iv-1",
            "John Smith",
            "john@example.com",
            "J1",
            "Backend Engineer",
            vec![],
        ),
        completed("iv-2", "Jane Doe", "j.s@x.com", "J1", "Backend Engineer", vec![]),
    ];
    let snapshot = compute(&records, &j1_catalog());

    let view = ViewState {
        filter: ResultFilter {
            search: Some("smith".to_string()),
            ..ResultFilter::default()
        },
        sort: None,
    };
    let matched = apply_view(&snapshot.results, &view);

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].candidate_name, "John Smith");
}

#[test]
fn descending_rating_sort_orders_and_keeps_ties_stable() {
    let records = vec![
        completed("iv-1", "Low", "low@example.com", "J1", "Backend Engineer", vec![response("Coding", 20), response("Communication", 20)]),
        completed("iv-2", "High", "high@example.com", "J1", "Backend Engineer", vec![response("Coding", 80), response("Communication", 80)]),
        completed("iv-3", "Mid", "mid@example.com", "J1", "Backend Engineer", vec![response("Coding", 50), response("Communication", 50)]),
    ];
    let snapshot = compute(&records, &j1_catalog());

    let view = ViewState {
        filter: ResultFilter::default(),
        sort: Some(SortSpec {
            key: SortKey::OverallRating,
            direction: SortDirection::Descending,
        }),
    };
    let sorted = apply_view(&snapshot.results, &view);
    let ratings: Vec<u8> = sorted.iter().map(|result| result.overall_rating).collect();
    assert_eq!(ratings, vec![80, 50, 20]);
}

#[test]
fn projected_columns_track_the_filtered_subset() {
    let mut catalog = j1_catalog();
    catalog.insert(
        "J2".to_string(),
        vec!["Visual Craft".to_string(), "Communication".to_string()],
    );

    let records = vec![
        completed("iv-1", "Candidate A", "a@example.com", "J1", "Backend Engineer", vec![]),
        completed("iv-2", "Candidate B", "b@example.com", "J2", "Product Designer", vec![]),
    ];
    let snapshot = compute(&records, &catalog);

    let all = project_columns(&snapshot.results, &catalog);
    assert_eq!(all, vec!["Coding", "Communication", "Visual Craft"]);

    let view = ViewState {
        filter: ResultFilter {
            job_id: Some("J2".to_string()),
            ..ResultFilter::default()
        },
        sort: None,
    };
    let narrowed = apply_view(&snapshot.results, &view);
    let columns = project_columns(&narrowed, &catalog);
    assert_eq!(columns, vec!["Communication", "Visual Craft"]);
}

#[tokio::test]
async fn query_endpoint_serves_the_full_pipeline() {
    let records = vec![
        completed(
            "iv-1",
            "Candidate A",
            "a@example.com",
            "J1",
            "Backend Engineer",
            vec![response("Coding", 80)],
        ),
        completed(
            "iv-2",
            "Candidate B",
            "b@example.com",
            "J2",
            "Product Designer",
            vec![response("Visual Craft", 90)],
        ),
    ];
    let mut sets = BTreeMap::new();
    sets.insert(
        "J1".to_string(),
        vec!["Coding".to_string(), "Communication".to_string()],
    );
    sets.insert("J2".to_string(), vec!["Visual Craft".to_string()]);

    let service = Arc::new(ResultsService::new(
        Arc::new(FixedSource(records)),
        Arc::new(FixedDirectory(vec![JobSummary {
            job_id: "J1".to_string(),
            title: "Backend Engineer".to_string(),
        }])),
        Arc::new(FixedRegistry(sets)),
    ));
    let app = results_router(service);

    let body = json!({
        "scope": "all",
        "view": {
            "filter": { "job_id": "J1" },
            "sort": { "key": "overall_rating", "direction": "descending" }
        }
    });
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/interview-results/query")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .expect("request builds");

    let response = app.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&bytes).expect("json payload");

    let results = payload["results"].as_array().expect("results array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["candidate_email"], "a@example.com");
    assert_eq!(results[0]["overall_rating"], 40);

    let columns: Vec<&str> = payload["columns"]
        .as_array()
        .expect("columns array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(columns, vec!["Coding", "Communication"]);
}
