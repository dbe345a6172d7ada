use crate::cli::ServeArgs;
use crate::infra::{build_adapter, AppState};
use crate::routes::with_operational_routes;
use ats_adapter::adapter::adapter_router;
use ats_adapter::config::AppConfig;
use ats_adapter::error::AppError;
use ats_adapter::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    if !config.recruitee.has_credentials() {
        warn!("RECRUITEE_COMPANY_ID or RECRUITEE_API_TOKEN is empty; vendor calls will be rejected");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let adapter = build_adapter(&config)?;
    let app = with_operational_routes(adapter_router(adapter))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        tenant = %config.recruitee.tenant_base_url(),
        "recruitee adapter ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
