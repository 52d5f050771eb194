use crate::cli::ServeArgs;
use crate::infra::{load_workforce, AppState, DashboardState};
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use hr_analytics::config::AppConfig;
use hr_analytics::error::AppError;
use hr_analytics::telemetry;
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
    if let Some(path) = args.dataset.take() {
        config.dataset.path = path;
    }
    if let Some(delimiter) = args.delimiter.take() {
        config.dataset.delimiter = delimiter;
    }

    telemetry::init(&config.telemetry)?;

    let table = load_workforce(&config.dataset, Local::now().date_naive())?;
    let state = DashboardState::new(table);
    info!(
        path = %config.dataset.path.display(),
        employees = state.table.len(),
        active = state.aggregates.headcount.active,
        terminated = state.aggregates.headcount.terminated,
        as_of = %state.table.as_of(),
        "employee dataset loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_dashboard_routes(state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "hr analytics dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
