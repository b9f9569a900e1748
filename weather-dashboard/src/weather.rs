use common::errors::AppError;
use common::http_client::HttpClient;
use common::models::{CurrentWeather, ForecastResponse};
use tracing::instrument;

use crate::forecast::SAMPLES_PER_REQUEST;

/// Client for the weather and forecast endpoints.
///
/// Coordinates are forwarded as-is; out-of-range values are the provider's to
/// reject, and its rejection surfaces as an upstream error.
pub struct WeatherClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Self {
        Self {
            http_client: HttpClient::new(timeout_secs),
            base_url,
            api_key,
        }
    }

    /// Current conditions at a point. Temperatures come back in Kelvin
    /// (`units=standard`), descriptions in English.
    #[instrument(skip(self))]
    pub async fn current(&self, lat: f64, lon: f64) -> Result<CurrentWeather, AppError> {
        let url = format!("{}/weather", self.base_url);
        let params = [
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", self.api_key.clone()),
            ("lang", "en".to_string()),
            ("units", "standard".to_string()),
        ];

        self.http_client.get_json(&url, &params).await
    }

    /// Raw 3-hour forecast samples, 40 at a time (roughly five days on the
    /// provider's free tier).
    #[instrument(skip(self))]
    pub async fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastResponse, AppError> {
        let url = format!("{}/forecast", self.base_url);
        let params = [
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "standard".to_string()),
            ("cnt", SAMPLES_PER_REQUEST.to_string()),
        ];

        self.http_client.get_json(&url, &params).await
    }
}
