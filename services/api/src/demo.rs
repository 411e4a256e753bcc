use std::collections::BTreeMap;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use crate::infra::{DerivedJobDirectory, InMemoryInterviewSource, StaticFocusAreaRegistry};
use hireflow::error::AppError;
use hireflow::results::{
    apply_view, parse_interview_export, project_columns, FocusAreaCatalog, InterviewRecord,
    InterviewScope, ResultFilter, ResultsService, SortDirection, SortKey, SortSpec, ViewState,
};

/// Bundled export covering two jobs, one multi-interview candidate, and an
/// in-progress row that aggregation must drop.
const SAMPLE_EXPORT: &str = "\
Interview ID,Candidate Name,Candidate Email,Job ID,Job Title,Template,Interviewer,Status,Completed At,Responses
iv-101,Ada Park,ada@example.com,job-backend,Backend Engineer,Technical Screen,Sam Lee,completed,2026-03-02T15:30:00Z,Coding:80|Clean solution;Communication:55
iv-102,Ada Park,ada@example.com,job-backend,Backend Engineer,System Design,Ravi Iyer,completed,2026-03-04T11:00:00Z,Coding:60;System Design:72
iv-103,John Smith,john.smith@example.com,job-backend,Backend Engineer,Technical Screen,Sam Lee,completed,2026-03-03T09:15:00Z,Coding:92;Communication:88;System Design:70
iv-104,Noor Haddad,noor@example.com,job-design,Product Designer,Portfolio Review,Min Zhou,completed,2026-03-01T16:45:00Z,Visual Craft:84;Communication:77
iv-105,Noor Haddad,noor@example.com,job-design,Product Designer,Critique Session,Lena Fox,in_progress,,
";

pub(crate) fn sample_interviews() -> Result<Vec<InterviewRecord>, AppError> {
    Ok(parse_interview_export(SAMPLE_EXPORT.as_bytes())?)
}

pub(crate) fn sample_focus_area_sets() -> BTreeMap<String, Vec<String>> {
    let mut sets = BTreeMap::new();
    sets.insert(
        "job-backend".to_string(),
        vec![
            "Coding".to_string(),
            "System Design".to_string(),
            "Communication".to_string(),
        ],
    );
    sets.insert(
        "job-design".to_string(),
        vec![
            "Visual Craft".to_string(),
            "Communication".to_string(),
            "Stakeholder Empathy".to_string(),
        ],
    );
    sets
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Interview export CSV to score; defaults to the bundled sample
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
    /// Restrict the view to one job id
    #[arg(long)]
    pub(crate) job: Option<String>,
    /// Free-text search over candidates, jobs, templates, and interviewers
    #[arg(long)]
    pub(crate) search: Option<String>,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let interviews = match &args.export {
        Some(path) => parse_interview_export(File::open(path)?)?,
        None => sample_interviews()?,
    };

    let sets = sample_focus_area_sets();
    let directory = Arc::new(DerivedJobDirectory::from_interviews(&interviews));
    let source = Arc::new(InMemoryInterviewSource::seeded(interviews));
    let registry = Arc::new(StaticFocusAreaRegistry::new(sets.clone()));
    let service = ResultsService::new(source, directory, registry);

    let snapshot = service.refresh(InterviewScope::All).await?;

    let view = ViewState {
        filter: ResultFilter {
            job_id: args.job.clone(),
            status: None,
            search: args.search.clone(),
        },
        sort: Some(SortSpec {
            key: SortKey::OverallRating,
            direction: SortDirection::Descending,
        }),
    };
    let results = apply_view(&snapshot.results, &view);

    let mut catalog = FocusAreaCatalog::new();
    for (job_id, titles) in sets {
        catalog.insert(job_id, titles);
    }
    let columns = project_columns(&results, &catalog);

    println!("Comparative interview results ({} candidates)", results.len());
    println!("Columns: {}", columns.join(" | "));
    println!();

    for result in &results {
        println!(
            "{:<3} {} <{}> — {}",
            result.overall_rating, result.candidate_name, result.candidate_email, result.job_title
        );
        for area in &result.area_scores {
            let responses = result
                .responses_by_focus_area
                .get(&area.focus_area)
                .map(Vec::len)
                .unwrap_or(0);
            println!(
                "      {:<22} {:>5.1}  ({} response{})",
                area.focus_area,
                area.score,
                responses,
                if responses == 1 { "" } else { "s" }
            );
        }
    }

    if snapshot.partial_failure() {
        println!();
        println!(
            "warning: focus areas unavailable for: {}",
            snapshot.degraded_jobs.join(", ")
        );
    }

    Ok(())
}
