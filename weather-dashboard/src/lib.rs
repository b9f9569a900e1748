pub mod config;
pub mod forecast;
pub mod geocoding;
pub mod handlers;
pub mod openapi;
pub mod orchestrator;
pub mod pages;
pub mod weather;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// The full HTTP surface: JSON API, dashboard pages, HTMX fragments, docs.
pub fn app(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/monthly", get(handlers::monthly_page))
        .route("/health", get(handlers::health))
        .route("/api/weather/{city}", get(handlers::get_weather))
        .route("/api/weather/monthly/{city}", get(handlers::get_monthly_weather))
        .route("/htmx/demo", get(handlers::htmx_demo))
        .route("/htmx/search", get(handlers::htmx_search))
        .route("/htmx/weather-card/{city}", get(handlers::htmx_weather_card))
        .route("/favicon.ico", get(handlers::favicon))
        .merge(openapi::swagger_ui())
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
