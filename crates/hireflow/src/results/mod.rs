//! Interview-results aggregation and scoring.
//!
//! Completed interviews are merged per (candidate, job), scored strictly
//! against each job's canonical focus-area set, and served through an
//! explicit filter/search/sort view with focus-area columns projected from
//! the filtered subset.

pub(crate) mod aggregate;
pub mod columns;
pub mod domain;
pub mod import;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod snapshot;
pub mod source;
pub mod view;

#[cfg(test)]
mod tests;

pub use columns::project_columns;
pub use domain::{
    CandidateIdentity, CandidateJobResult, FocusAreaCatalog, FocusAreaResponse, FocusAreaScore,
    InterviewId, InterviewRecord, InterviewStatus, JobSummary,
};
pub use import::parse_interview_export;
pub use router::{results_router, QueryRequest, QueryResponse};
pub use service::{ResultsError, ResultsService};
pub use snapshot::{compute, ResultSnapshot};
pub use source::{FetchError, FocusAreaRegistry, InterviewScope, InterviewSource, JobDirectory};
pub use view::{apply_view, ResultFilter, SortDirection, SortKey, SortSpec, ViewState};
