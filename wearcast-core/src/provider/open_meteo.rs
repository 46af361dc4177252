use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::error::WeatherError;
use crate::provider::{GeoMatch, RawCurrent, RawDaily, RawForecast, WeatherProvider};
use async_trait::async_trait;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

const CURRENT_VARS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m,precipitation";
const DAILY_VARS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max";

/// Open-Meteo backend. Free, no API key required; both the geocoding and
/// forecast endpoints live here.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    forecast_url: String,
    geocoding_url: String,
    forecast_days: u8,
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            forecast_url: FORECAST_URL.to_string(),
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_days: 5,
        }
    }

    /// Construct a provider honoring the configured forecast length.
    pub fn from_config(config: &Config) -> Self {
        let mut provider = Self::new();
        provider.forecast_days = config.effective_forecast_days();
        provider
    }

    /// Override endpoint base URLs, for tests against a local server.
    pub fn with_base_urls(mut self, forecast_url: String, geocoding_url: String) -> Self {
        self.forecast_url = forecast_url;
        self.geocoding_url = geocoding_url;
        self
    }

    async fn geocode(&self, query: &[(&str, &str)]) -> Result<Option<GeoMatch>, WeatherError> {
        let res = self.http.get(&self.geocoding_url).query(query).send().await?;

        let status = res.status();
        if !status.is_success() {
            // Non-success from the geocoder counts as "no match".
            tracing::debug!(%status, "geocoding request returned non-success status");
            return Ok(None);
        }

        let body = res.text().await?;
        let parsed: OmGeoResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::Parse(format!("geocoding JSON: {e}")))?;

        let first = parsed.results.unwrap_or_default().into_iter().next();
        Ok(first.map(|r| GeoMatch {
            name: r.name,
            country: r.country.unwrap_or_default(),
            latitude: r.latitude,
            longitude: r.longitude,
        }))
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn geocode_by_name(&self, name: &str) -> Result<Option<GeoMatch>, WeatherError> {
        self.geocode(&[("name", name), ("count", "1")]).await
    }

    async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<Option<GeoMatch>, WeatherError> {
        let lat = lat.to_string();
        let lon = lon.to_string();
        self.geocode(&[("latitude", &lat), ("longitude", &lon), ("count", "1")])
            .await
    }

    async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<RawForecast, WeatherError> {
        let lat = lat.to_string();
        let lon = lon.to_string();
        let days = self.forecast_days.to_string();

        let res = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", lat.as_str()),
                ("longitude", lon.as_str()),
                ("current", CURRENT_VARS),
                ("daily", DAILY_VARS),
                ("forecast_days", days.as_str()),
                ("windspeed_unit", "kmh"),
                ("timezone", "auto"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Provider(format!(
                "forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: OmForecastResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::Parse(format!("forecast JSON: {e}")))?;

        Ok(RawForecast {
            current: RawCurrent {
                temperature_c: parsed.current.temperature_2m,
                feels_like_c: parsed.current.apparent_temperature,
                humidity_pct: parsed.current.relative_humidity_2m,
                weather_code: parsed.current.weather_code,
                wind_speed_kmh: parsed.current.wind_speed_10m,
                precipitation_mm: parsed.current.precipitation,
            },
            daily: parsed.daily.map(|d| RawDaily {
                dates: d.time,
                max_temp_c: d.temperature_2m_max,
                min_temp_c: d.temperature_2m_min,
                weather_codes: d.weather_code,
                precipitation_probability: d
                    .precipitation_probability_max
                    .into_iter()
                    .map(|p| p.unwrap_or(0))
                    .collect(),
            }),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OmGeoResult {
    name: String,
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct OmGeoResponse {
    results: Option<Vec<OmGeoResult>>,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    apparent_temperature: f64,
    relative_humidity_2m: u8,
    weather_code: i32,
    wind_speed_10m: f64,
    precipitation: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    weather_code: Vec<i32>,
    #[serde(default)]
    precipitation_probability_max: Vec<Option<u8>>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: OmCurrent,
    daily: Option<OmDaily>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
