use common::errors::AppError;
use common::models::{CurrentWeather, MonthlyForecast};
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::forecast;
use crate::geocoding::GeoClient;
use crate::weather::WeatherClient;

/// Two-stage lookup: geocode the city, then fetch weather for the resolved
/// coordinates. At most one geocode call and one weather/forecast call per
/// request; a resolved location is never re-resolved.
pub struct WeatherOrchestrator {
    geo: GeoClient,
    weather: WeatherClient,
}

impl WeatherOrchestrator {
    pub fn new(config: &Config) -> Self {
        Self {
            geo: GeoClient::new(
                config.geo_url.clone(),
                config.api_key.clone(),
                config.http_timeout_seconds,
            ),
            weather: WeatherClient::new(
                config.weather_url.clone(),
                config.api_key.clone(),
                config.http_timeout_seconds,
            ),
        }
    }

    /// Current conditions for a city, with the geocoded location merged into
    /// the report.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn current_for_city(&self, city: &str) -> Result<CurrentWeather, AppError> {
        let location = self.resolve(city).await?;

        let mut report = match self.weather.current(location.lat, location.lon).await {
            Ok(report) => report,
            Err(e) => {
                error!(
                    stage = "current",
                    city = %city,
                    lat = location.lat,
                    lon = location.lon,
                    error = %e,
                    "Weather fetch failed"
                );
                return Err(e);
            }
        };

        info!(city = %report.name, country = %location.country, "Current weather resolved");
        report.location = Some(location);
        Ok(report)
    }

    /// Daily-aggregated forecast for a city.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn monthly_for_city(&self, city: &str) -> Result<MonthlyForecast, AppError> {
        let location = self.resolve(city).await?;

        let raw = match self.weather.forecast(location.lat, location.lon).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(
                    stage = "forecast",
                    city = %city,
                    lat = location.lat,
                    lon = location.lon,
                    error = %e,
                    "Forecast fetch failed"
                );
                return Err(e);
            }
        };

        let aggregated = forecast::aggregate_daily(raw);
        info!(city = %city, days = aggregated.cnt, "Forecast aggregated");
        Ok(aggregated)
    }

    async fn resolve(&self, city: &str) -> Result<common::models::Location, AppError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::EmptyQuery);
        }

        match self.geo.resolve(city).await {
            Ok(Some(location)) => Ok(location),
            Ok(None) => Err(AppError::CityNotFound),
            Err(e) => {
                error!(stage = "geocode", city = %city, error = %e, "Geocoding failed");
                Err(e)
            }
        }
    }
}
