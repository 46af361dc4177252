use crate::error::WeatherError;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// One geocoding match: coordinates plus human-readable place name.
#[derive(Debug, Clone)]
pub struct GeoMatch {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw current conditions as reported by a provider, before normalization.
/// Units are already provider-stated metric (°C, km/h, mm).
#[derive(Debug, Clone)]
pub struct RawCurrent {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub weather_code: i32,
    pub wind_speed_kmh: f64,
    /// `None` when the provider omitted the field entirely.
    pub precipitation_mm: Option<f64>,
}

/// Raw daily forecast arrays, indexed in parallel by day.
#[derive(Debug, Clone, Default)]
pub struct RawDaily {
    /// ISO dates ("2024-04-20"), chronological.
    pub dates: Vec<String>,
    pub max_temp_c: Vec<f64>,
    pub min_temp_c: Vec<f64>,
    pub weather_codes: Vec<i32>,
    pub precipitation_probability: Vec<u8>,
}

/// A raw forecast response. Daily data is optional; its absence yields an
/// empty forecast downstream, not an error.
#[derive(Debug, Clone)]
pub struct RawForecast {
    pub current: RawCurrent,
    pub daily: Option<RawDaily>,
}

/// Abstraction over the geocoding + forecast backend.
///
/// Forward geocoding distinguishes "no match" (`Ok(None)`, reported to the
/// caller as NotFound) from transport failures. Reverse geocoding callers
/// treat any failure or empty result as recoverable.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn geocode_by_name(&self, name: &str) -> Result<Option<GeoMatch>, WeatherError>;

    async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<Option<GeoMatch>, WeatherError>;

    async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<RawForecast, WeatherError>;
}
