mod error;

use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{CompoundParams, GoalParams, RetirementParams, ServeConfig};
use crate::core::{
    CompoundResult, GoalResult, Holding, PortfolioMetrics, RetirementResult, project_compound,
    project_goal, project_retirement, summarize_portfolio,
};

pub use error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioPayload {
    holdings: Vec<Holding>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/retirement",
            get(retirement_get_handler).post(retirement_post_handler),
        )
        .route("/api/goal", get(goal_get_handler).post(goal_post_handler))
        .route(
            "/api/compound",
            get(compound_get_handler).post(compound_post_handler),
        )
        .route("/api/portfolio", post(portfolio_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_http_server(config: &ServeConfig) -> std::io::Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("advisor HTTP API listening on http://{addr}");
    if let Some(url) = local_access_url(config) {
        tracing::info!("local access: {url}");
    }

    axum::serve(listener, router()).await
}

/// Loopback health URL, only worth printing when bound to a wildcard address.
fn local_access_url(config: &ServeConfig) -> Option<String> {
    config
        .bind
        .is_unspecified()
        .then(|| format!("http://127.0.0.1:{}/health", config.port))
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn not_found_handler() -> Response {
    ApiError::NotFound.into_response()
}

async fn retirement_get_handler(
    query: Result<Query<RetirementParams>, QueryRejection>,
) -> Response {
    respond(
        query
            .map(|Query(params)| params)
            .map_err(|e| ApiError::MalformedPayload(e.body_text()))
            .and_then(retirement),
    )
}

async fn retirement_post_handler(
    payload: Result<Json<RetirementParams>, JsonRejection>,
) -> Response {
    respond(
        payload
            .map(|Json(params)| params)
            .map_err(|e| ApiError::MalformedPayload(e.body_text()))
            .and_then(retirement),
    )
}

async fn goal_get_handler(query: Result<Query<GoalParams>, QueryRejection>) -> Response {
    respond(
        query
            .map(|Query(params)| params)
            .map_err(|e| ApiError::MalformedPayload(e.body_text()))
            .and_then(goal),
    )
}

async fn goal_post_handler(payload: Result<Json<GoalParams>, JsonRejection>) -> Response {
    respond(
        payload
            .map(|Json(params)| params)
            .map_err(|e| ApiError::MalformedPayload(e.body_text()))
            .and_then(goal),
    )
}

async fn compound_get_handler(query: Result<Query<CompoundParams>, QueryRejection>) -> Response {
    respond(
        query
            .map(|Query(params)| params)
            .map_err(|e| ApiError::MalformedPayload(e.body_text()))
            .and_then(compound),
    )
}

async fn compound_post_handler(payload: Result<Json<CompoundParams>, JsonRejection>) -> Response {
    respond(
        payload
            .map(|Json(params)| params)
            .map_err(|e| ApiError::MalformedPayload(e.body_text()))
            .and_then(compound),
    )
}

async fn portfolio_handler(payload: Result<Json<PortfolioPayload>, JsonRejection>) -> Response {
    respond(
        payload
            .map(|Json(payload)| payload)
            .map_err(|e| ApiError::MalformedPayload(e.body_text()))
            .and_then(portfolio),
    )
}

fn retirement(params: RetirementParams) -> ApiResult<RetirementResult> {
    Ok(project_retirement(&params.into_input())?)
}

fn goal(params: GoalParams) -> ApiResult<GoalResult> {
    Ok(project_goal(&params.into_input())?)
}

fn compound(params: CompoundParams) -> ApiResult<CompoundResult> {
    Ok(project_compound(&params.into_input())?)
}

fn portfolio(payload: PortfolioPayload) -> ApiResult<PortfolioMetrics> {
    Ok(summarize_portfolio(&payload.holdings)?)
}

fn respond<T: Serialize>(result: ApiResult<T>) -> Response {
    match result {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(err) => err.into_response(),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}
