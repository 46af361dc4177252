//! Weather normalizer: turns geocoding + raw forecast responses into a
//! canonical [`WeatherRecord`] with defined fallback behavior for partial
//! or malformed inputs.

use chrono::{Local, NaiveDate};

use crate::error::WeatherError;
use crate::model::{Condition, CurrentConditions, ForecastDay, Location, WeatherRecord};
use crate::provider::{RawForecast, WeatherProvider};

/// Name substituted when reverse geocoding cannot resolve coordinates.
const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Resolve a user query to a location.
///
/// A query containing a comma is interpreted as "lat,lon" and reverse
/// geocoded; failure or an empty result there is recovered locally with a
/// placeholder name while keeping the literal parsed coordinates. A plain
/// name is forward geocoded, and no match is a reportable
/// [`WeatherError::NotFound`].
pub async fn resolve_location(
    provider: &dyn WeatherProvider,
    query: &str,
) -> Result<Location, WeatherError> {
    if let Some((lat_str, lon_str)) = query.split_once(',') {
        let (Ok(lat), Ok(lon)) = (lat_str.trim().parse::<f64>(), lon_str.trim().parse::<f64>())
        else {
            return Err(WeatherError::InvalidCoordinates(query.to_string()));
        };

        let place = match provider.reverse_geocode(lat, lon).await {
            Ok(Some(place)) => Some(place),
            Ok(None) => None,
            Err(err) => {
                tracing::debug!("reverse geocoding failed, using placeholder: {err}");
                None
            }
        };

        let location = match place {
            Some(place) => Location {
                name: place.name,
                country: place.country,
                latitude: lat,
                longitude: lon,
            },
            None => Location {
                name: UNKNOWN_LOCATION.to_string(),
                country: String::new(),
                latitude: lat,
                longitude: lon,
            },
        };
        Ok(location)
    } else {
        match provider.geocode_by_name(query).await? {
            Some(place) => Ok(Location {
                name: place.name,
                country: place.country,
                latitude: place.latitude,
                longitude: place.longitude,
            }),
            None => Err(WeatherError::NotFound(query.to_string())),
        }
    }
}

/// Build a canonical weather record from a raw forecast and a resolved
/// location. Missing daily data yields an empty forecast; no synthetic
/// weather values are ever substituted.
pub fn build_weather_record(raw: &RawForecast, location: Location) -> WeatherRecord {
    let now = Local::now();
    let condition = Condition::from_code(raw.current.weather_code);
    let has_rain_or_snow = condition.is_precipitating()
        || raw.current.precipitation_mm.is_some_and(|mm| mm > 0.0);

    let current = CurrentConditions {
        temperature_c: raw.current.temperature_c,
        feels_like_c: raw.current.feels_like_c,
        condition,
        condition_icon: "01d".to_string(),
        humidity_pct: raw.current.humidity_pct,
        wind_speed_kmh: raw.current.wind_speed_kmh,
        precipitation_mm: raw.current.precipitation_mm,
        uv_index: 0.0,
        date: display_date(now.date_naive()),
        time: now.format("%H:%M").to_string(),
        has_rain_or_snow,
    };

    let forecast = raw.daily.as_ref().map(forecast_days).unwrap_or_default();

    WeatherRecord { location, current, forecast }
}

/// Fetch and normalize weather for a location query: resolve the location,
/// fetch the forecast for its coordinates, build the record. Provider
/// failures propagate; only reverse-geocoding is recovered (inside
/// [`resolve_location`]).
pub async fn fetch_weather(
    provider: &dyn WeatherProvider,
    query: &str,
) -> Result<WeatherRecord, WeatherError> {
    let location = resolve_location(provider, query).await?;
    tracing::debug!(
        name = %location.name,
        latitude = location.latitude,
        longitude = location.longitude,
        "resolved location"
    );
    let raw = provider.fetch_forecast(location.latitude, location.longitude).await?;
    Ok(build_weather_record(&raw, location))
}

fn forecast_days(daily: &crate::provider::RawDaily) -> Vec<ForecastDay> {
    // Zip the parallel arrays by index; days missing any component are
    // dropped rather than filled in.
    daily
        .dates
        .iter()
        .enumerate()
        .filter_map(|(i, date)| {
            let max_temp_c = *daily.max_temp_c.get(i)?;
            let min_temp_c = *daily.min_temp_c.get(i)?;
            let code = *daily.weather_codes.get(i)?;
            let precipitation_probability =
                daily.precipitation_probability.get(i).copied().unwrap_or(0);

            let condition = Condition::from_code(code);
            Some(ForecastDay {
                date: display_forecast_date(date),
                max_temp_c,
                min_temp_c,
                condition,
                precipitation_probability,
                // Condition-only: daily data has no precipitation-amount
                // fallback.
                has_rain_or_snow: condition.is_precipitating(),
            })
        })
        .collect()
}

/// Format a date for display, e.g. "SAT, 20 APR".
fn display_date(date: NaiveDate) -> String {
    date.format("%a, %-d %b").to_string().to_uppercase()
}

/// Forecast dates arrive as ISO strings; unparseable ones are shown as-is.
fn display_forecast_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(display_date)
        .unwrap_or_else(|_| iso.to_uppercase())
}
