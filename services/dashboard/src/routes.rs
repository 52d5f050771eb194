use crate::infra::{AppState, DashboardState};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Extension, Json, Router};
use hr_analytics::error::AppError;
use hr_analytics::workforce::presenter::{render_dashboard_page, RecordsView};
use hr_analytics::workforce::{
    query_employees, Dashboard, EmployeePage, EmployeeQuery, TabId, WorkforceAggregates,
};
use serde_json::json;
use std::collections::HashMap;

pub(crate) fn dashboard_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/v1/dashboard", get(dashboard_spec_endpoint))
        .route("/api/v1/aggregates", get(aggregates_endpoint))
        .route("/api/v1/employees", get(employees_endpoint))
        .with_state(state)
}

pub(crate) fn with_dashboard_routes(state: DashboardState) -> Router {
    dashboard_router(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Unknown or missing `tab` values fall back to the overview.
pub(crate) async fn dashboard_page(
    State(state): State<DashboardState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let active = params
        .get("tab")
        .and_then(|slug| TabId::from_slug(slug))
        .unwrap_or(TabId::Overview);

    let html = if active == TabId::EmployeeRecords {
        let query = employee_query(&params)?;
        let page = query_employees(&state.table, &query);
        render_dashboard_page(
            &state.dashboard,
            active,
            Some(RecordsView {
                query: &query,
                page: &page,
            }),
        )
    } else {
        render_dashboard_page(&state.dashboard, active, None)
    };

    Ok(Html(html))
}

pub(crate) async fn dashboard_spec_endpoint(
    State(state): State<DashboardState>,
) -> Json<Dashboard> {
    Json(state.dashboard.as_ref().clone())
}

pub(crate) async fn aggregates_endpoint(
    State(state): State<DashboardState>,
) -> Json<WorkforceAggregates> {
    Json(state.aggregates.as_ref().clone())
}

pub(crate) async fn employees_endpoint(
    State(state): State<DashboardState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<EmployeePage>, AppError> {
    let query = employee_query(&params)?;
    Ok(Json(query_employees(&state.table, &query)))
}

fn employee_query(params: &HashMap<String, String>) -> Result<EmployeeQuery, AppError> {
    let query = EmployeeQuery::from_params(
        params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    )?;
    Ok(query)
}
