use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryStore};
use crate::routes::with_service_routes;
use atomik::config::AppConfig;
use atomik::error::AppError;
use atomik::telemetry;
use atomik::workflows::aptitude::AptitudeService;
use atomik::workflows::tutors::TutorDirectoryService;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let store = Arc::new(InMemoryStore::default());
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        store: store.clone(),
    };

    let tutor_service = Arc::new(TutorDirectoryService::new(store.tutors.clone()));
    let aptitude_service = Arc::new(AptitudeService::new(
        store.candidates.clone(),
        config.aptitude.clone(),
    ));

    if let Some(path) = args.seed_tutors.take() {
        let ids = tutor_service.import_path(&path)?;
        info!(path = %path.display(), tutors = ids.len(), "tutor directory seeded");
    }

    let app = with_service_routes(tutor_service, aptitude_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        answer_key_length = config.aptitude.answer_key.len(),
        "atomik backend ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
