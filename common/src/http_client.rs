use crate::errors::AppError;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// HTTP client with a bounded per-request wait.
///
/// Exactly one attempt per call: a failed or timed-out request surfaces
/// immediately, it is never retried.
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// GET `url` with `params` as the query string and decode the JSON body.
    #[instrument(skip(self, params), fields(url = %url))]
    pub async fn get_json<T, P>(&self, url: &str, params: &P) -> Result<T, AppError>
    where
        T: serde::de::DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let request = self.client.get(url).query(params).send();

        let response = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| AppError::timeout(format!("Request to {} timed out", url)))?
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::timeout(format!("Request to {} timed out", url))
                } else {
                    AppError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url = %url, status = status.as_u16(), body = %body, "Upstream returned error status");
            return Err(AppError::upstream(
                status.as_u16(),
                format!("HTTP error: {}", status),
            ));
        }

        let text = response.text().await.map_err(AppError::Network)?;
        let json: T = serde_json::from_str(&text).map_err(AppError::Parse)?;

        info!(url = %url, "Request successful");
        Ok(json)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(10)
    }
}
