use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::demo::{sample_focus_area_sets, sample_interviews};
use crate::infra::{AppState, DerivedJobDirectory, InMemoryInterviewSource, StaticFocusAreaRegistry};
use crate::routes::with_results_routes;
use hireflow::config::AppConfig;
use hireflow::error::AppError;
use hireflow::results::ResultsService;
use hireflow::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let interviews = sample_interviews()?;
    let directory = Arc::new(DerivedJobDirectory::from_interviews(&interviews));
    let source = Arc::new(InMemoryInterviewSource::seeded(interviews));
    let registry = Arc::new(StaticFocusAreaRegistry::new(sample_focus_area_sets()));
    let service = Arc::new(ResultsService::new(source, directory, registry));

    let app = with_results_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "interview results service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
