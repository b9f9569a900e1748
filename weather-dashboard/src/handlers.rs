use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json},
};
use common::errors::{AppError, ErrorDetail};
use common::models::{CurrentWeather, MonthlyForecast};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::orchestrator::WeatherOrchestrator;
use crate::pages;

static FAVICON: &[u8] = include_bytes!("../static/favicon.ico");

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<WeatherOrchestrator>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check")
    )
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "weather-dashboard" }))
}

#[utoipa::path(
    get,
    path = "/api/weather/{city}",
    params(
        ("city" = String, Path, description = "City name")
    ),
    responses(
        (status = 200, description = "Current weather with merged location", body = CurrentWeather),
        (status = 404, description = "City not found"),
        (status = 504, description = "Upstream call timed out"),
        (status = 500, description = "Upstream or internal failure")
    )
)]
pub async fn get_weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<CurrentWeather>, AppError> {
    info!(city = %city, "Weather request received");

    let report = state.orchestrator.current_for_city(&city).await?;

    Ok(Json(report))
}

#[utoipa::path(
    get,
    path = "/api/weather/monthly/{city}",
    params(
        ("city" = String, Path, description = "City name")
    ),
    responses(
        (status = 200, description = "Daily-aggregated forecast", body = MonthlyForecast),
        (status = 404, description = "City not found"),
        (status = 504, description = "Upstream call timed out"),
        (status = 500, description = "Upstream or internal failure")
    )
)]
pub async fn get_monthly_weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<MonthlyForecast>, AppError> {
    info!(city = %city, "Monthly forecast request received");

    let forecast = state.orchestrator.monthly_for_city(&city).await?;

    Ok(Json(forecast))
}

/// Router fallback. Also covers `/api/weather/` with an empty city segment,
/// which never matches the parameterized route.
pub async fn not_found() -> (StatusCode, Json<ErrorDetail>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDetail {
            detail: "Not Found".to_string(),
        }),
    )
}

pub async fn home() -> Html<&'static str> {
    Html(pages::dashboard())
}

pub async fn monthly_page() -> Html<&'static str> {
    Html(pages::monthly_dashboard())
}

pub async fn htmx_demo() -> Html<&'static str> {
    Html(pages::htmx_demo())
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

pub async fn htmx_search(Query(params): Query<SearchParams>) -> Html<String> {
    Html(pages::search_results(&params.query))
}

pub async fn htmx_weather_card(Path(city): Path<String>) -> Html<String> {
    Html(pages::weather_card(&city))
}

pub async fn favicon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/x-icon")], FAVICON)
}
