use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::columns::project_columns;
use super::domain::{CandidateJobResult, FocusAreaCatalog};
use super::service::{ResultsError, ResultsService};
use super::source::{FetchError, FocusAreaRegistry, InterviewScope, InterviewSource, JobDirectory};
use super::view::{apply_view, ViewState};

/// Router builder exposing the comparative-results endpoints.
pub fn results_router<S, D, R>(service: Arc<ResultsService<S, D, R>>) -> Router
where
    S: InterviewSource + 'static,
    D: JobDirectory + 'static,
    R: FocusAreaRegistry + 'static,
{
    Router::new()
        .route(
            "/api/v1/interview-results/query",
            post(query_handler::<S, D, R>),
        )
        .route("/api/v1/jobs", get(jobs_handler::<S, D, R>))
        .with_state(service)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub scope: InterviewScope,
    #[serde(default)]
    pub view: ViewState,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub results: Vec<CandidateJobResult>,
    /// Focus-area columns scoped to the filtered result list.
    pub columns: Vec<String>,
    pub degraded_jobs: Vec<String>,
    pub partial_failure: bool,
}

pub(crate) async fn query_handler<S, D, R>(
    State(service): State<Arc<ResultsService<S, D, R>>>,
    axum::Json(request): axum::Json<QueryRequest>,
) -> Response
where
    S: InterviewSource + 'static,
    D: JobDirectory + 'static,
    R: FocusAreaRegistry + 'static,
{
    let snapshot = match service.refresh(request.scope).await {
        Ok(snapshot) => snapshot,
        Err(error) => return error_response(error),
    };

    let results = apply_view(&snapshot.results, &request.view);

    // Column projection only needs the canonical sets of filtered jobs, and
    // those already travel on the scored results.
    let mut catalog = FocusAreaCatalog::new();
    for result in &results {
        catalog.insert(
            result.job_id.clone(),
            result
                .area_scores
                .iter()
                .map(|area| area.focus_area.clone())
                .collect(),
        );
    }
    let columns = project_columns(&results, &catalog);

    let partial_failure = snapshot.partial_failure();
    let body = QueryResponse {
        results,
        columns,
        degraded_jobs: snapshot.degraded_jobs,
        partial_failure,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

pub(crate) async fn jobs_handler<S, D, R>(
    State(service): State<Arc<ResultsService<S, D, R>>>,
) -> Response
where
    S: InterviewSource + 'static,
    D: JobDirectory + 'static,
    R: FocusAreaRegistry + 'static,
{
    match service.jobs() {
        Ok(jobs) => (StatusCode::OK, axum::Json(jobs)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ResultsError) -> Response {
    let status = match &error {
        ResultsError::Fetch(FetchError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
        ResultsError::Fetch(FetchError::Rejected(_)) => StatusCode::BAD_GATEWAY,
        ResultsError::TaskJoin(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let retryable = matches!(&error, ResultsError::Fetch(_));
    let payload = json!({
        "error": error.to_string(),
        "retryable": retryable,
    });
    (status, axum::Json(payload)).into_response()
}
