use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A geocoded location, the first match returned by the geocoding endpoint.
///
/// The provider sends more than we model (`local_names`, `state`, ...); those
/// fields ride along in `extra` and reappear on serialization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub country: String,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

/// One weather condition entry (the provider always sends a list).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeatherCondition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Core metrics block. Temperatures are Kelvin (`units=standard`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MainMetrics {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i64,
    pub humidity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sea_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grnd_level: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Wind {
    pub speed: f64,
    pub deg: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gust: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Clouds {
    pub all: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// Precipitation volume; the provider keys it by accumulation window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct Precipitation {
    #[serde(rename = "1h", skip_serializing_if = "Option::is_none")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h", skip_serializing_if = "Option::is_none")]
    pub three_hours: Option<f64>,
}

/// Current conditions for a city, in the shape the weather endpoint returns
/// it, plus the `location` block the orchestrator merges in after geocoding.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentWeather {
    pub coord: Coord,
    pub weather: Vec<WeatherCondition>,
    pub base: String,
    pub main: MainMetrics,
    pub visibility: i64,
    pub wind: Wind,
    pub clouds: Clouds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain: Option<Precipitation>,
    /// Observation time, unix epoch seconds.
    pub dt: i64,
    /// Sunrise/sunset and provider bookkeeping, passed through untyped.
    pub sys: Map<String, Value>,
    /// Offset from UTC in seconds.
    pub timezone: i64,
    pub id: i64,
    pub name: String,
    pub cod: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

/// One 3-hour forecast sample from the forecast endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForecastSample {
    pub dt: i64,
    pub main: MainMetrics,
    pub weather: Vec<WeatherCondition>,
    pub wind: Wind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain: Option<Precipitation>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

/// City metadata block of the forecast response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForecastCity {
    pub id: i64,
    pub name: String,
    pub coord: Coord,
    pub country: String,
    pub timezone: i64,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

/// Raw forecast endpoint response: `cnt` 3-hour samples in chronological
/// order. `cod` is passed through as-is; the provider sends it as a string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForecastResponse {
    pub city: ForecastCity,
    #[schema(ignore)]
    pub cod: Value,
    pub cnt: i64,
    pub list: Vec<ForecastSample>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct DailyTemp {
    pub day: f64,
    pub min: f64,
    pub max: f64,
}

/// One calendar day of forecast, seeded from the first 3-hour sample seen for
/// that date.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DailyForecastEntry {
    /// Epoch of the first sample that fell on this date.
    pub dt: i64,
    pub temp: DailyTemp,
    pub humidity: i64,
    pub weather: Vec<WeatherCondition>,
    pub speed: f64,
    /// 3-hour rain volume of the seed sample, 0 when absent.
    pub rain: f64,
}

/// Daily-aggregated forecast as served to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonthlyForecast {
    pub city: ForecastCity,
    #[schema(ignore)]
    pub cod: Value,
    pub message: i64,
    pub cnt: usize,
    pub list: Vec<DailyForecastEntry>,
}
