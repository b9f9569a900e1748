use common::errors::AppError;
use common::http_client::HttpClient;
use common::models::Location;
use tracing::{info, instrument};

/// Client for the geocoding endpoint: free-text city name in, coordinates out.
pub struct GeoClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl GeoClient {
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Self {
        Self {
            http_client: HttpClient::new(timeout_secs),
            base_url,
            api_key,
        }
    }

    /// Up to `limit` candidate locations, in provider order. An empty result
    /// is a valid answer, not an error.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn search(&self, city: &str, limit: u8) -> Result<Vec<Location>, AppError> {
        let url = format!("{}/direct", self.base_url);
        let limit = limit.to_string();
        let params = [
            ("q", city),
            ("limit", limit.as_str()),
            ("appid", self.api_key.as_str()),
        ];

        self.http_client.get_json(&url, &params).await
    }

    /// Best match for `city`: the first element of a single-result search.
    /// No ranking beyond provider order, single attempt, no retry.
    pub async fn resolve(&self, city: &str) -> Result<Option<Location>, AppError> {
        let mut matches = self.search(city, 1).await?;

        if matches.is_empty() {
            info!(city = %city, "No geocoding match");
            return Ok(None);
        }

        Ok(Some(matches.remove(0)))
    }
}
