use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use common::models::{CurrentWeather, MonthlyForecast};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::get_weather,
        handlers::get_monthly_weather,
    ),
    components(schemas(
        CurrentWeather,
        MonthlyForecast,
        common::models::Location,
        common::models::WeatherCondition,
        common::models::MainMetrics,
        common::models::Wind,
        common::models::DailyForecastEntry,
    )),
    tags(
        (name = "weather", description = "Current weather and forecast endpoints"),
    ),
)]
struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
