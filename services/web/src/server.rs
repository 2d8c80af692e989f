use crate::cli::ServeArgs;
use crate::infra::{default_validation_policy, AppState, InMemoryClipboard};
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use sav_clan::config::AppConfig;
use sav_clan::error::AppError;
use sav_clan::recruitment::RecruitmentService;
use sav_clan::telemetry;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(RecruitmentService::new(
        Box::new(InMemoryClipboard::default()),
        default_validation_policy(),
        config.recruitment.group_link.clone(),
    ));

    let app = with_site_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "clan site ready");

    axum::serve(listener, app).await?;
    Ok(())
}
