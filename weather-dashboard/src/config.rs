use std::env;

const DEFAULT_GEO_URL: &str = "http://api.openweathermap.org/geo/1.0";
const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5";

pub struct Config {
    pub port: u16,
    /// OpenWeatherMap API key, required.
    pub api_key: String,
    /// Base URL of the geocoding API, without trailing slash.
    pub geo_url: String,
    /// Base URL of the weather/forecast API, without trailing slash.
    pub weather_url: String,
    pub http_timeout_seconds: u64,
}

impl Config {
    /// Reads configuration once at startup. The API key is the only required
    /// variable; without it the process refuses to start.
    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("OPENWEATHER_API_KEY")
            .map_err(|_| "Missing OPENWEATHER_API_KEY environment variable".to_string())?;

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            api_key,
            geo_url: env::var("OPENWEATHER_GEO_URL")
                .unwrap_or_else(|_| DEFAULT_GEO_URL.to_string()),
            weather_url: env::var("OPENWEATHER_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            http_timeout_seconds: env::var("HTTP_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        })
    }
}
