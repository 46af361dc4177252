use thiserror::Error;

/// Errors surfaced by location resolution and weather fetching.
///
/// Reverse-geocoding failures are deliberately absent: they are recovered
/// locally with a placeholder location. Out-of-range temperatures are not
/// errors either; the outfit engine clamps them to a default band.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Forward geocoding found no match for the query. User-visible and
    /// distinct from recoverable reverse-lookup failures.
    #[error("No location found matching '{0}'.")]
    NotFound(String),

    /// The query looked like "lat,lon" but did not parse as coordinates.
    #[error("Could not parse '{0}' as latitude,longitude coordinates.")]
    InvalidCoordinates(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The forecast provider returned a non-success status or an otherwise
    /// unusable response. Never silently replaced with synthetic data here;
    /// any demo fallback is a presentation decision.
    #[error("Weather provider error: {0}")]
    Provider(String),

    #[error("Failed to parse provider response: {0}")]
    Parse(String),
}
