use serde::{Deserialize, Serialize};

/// Weather condition buckets derived from numeric provider weather codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Clear,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
}

impl Condition {
    /// Bucket a WMO-style weather code into a condition.
    ///
    /// Codes are grouped by ascending threshold; anything outside the
    /// documented 0..=99 range (including negative codes) falls back to
    /// `Clear` rather than failing.
    pub fn from_code(code: i32) -> Self {
        match code {
            i32::MIN..=3 => Condition::Clear,
            4..=49 => Condition::Fog,
            50..=59 => Condition::Drizzle,
            60..=69 => Condition::Rain,
            70..=79 => Condition::Snow,
            80..=99 => Condition::Thunderstorm,
            _ => Condition::Clear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::Fog => "Fog",
            Condition::Drizzle => "Drizzle",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Thunderstorm => "Thunderstorm",
        }
    }

    /// Whether this condition by itself implies falling rain or snow.
    pub fn is_precipitating(&self) -> bool {
        matches!(self, Condition::Rain | Condition::Snow | Condition::Drizzle)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A geocoded place. Immutable once attached to a [`WeatherRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// May be empty when the geocoder could not determine a country.
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current observed conditions, normalized to provider-independent units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub condition: Condition,
    /// Placeholder icon code passed through to presentation.
    pub condition_icon: String,
    pub humidity_pct: u8,
    pub wind_speed_kmh: f64,
    /// `None` means the provider did not report precipitation, not zero.
    pub precipitation_mm: Option<f64>,
    /// Not available from the provider, placeholder.
    pub uv_index: f64,
    /// Display-formatted observation date, e.g. "SAT, 20 APR".
    pub date: String,
    /// Display-formatted observation time, e.g. "12:34".
    pub time: String,
    pub has_rain_or_snow: bool,
}

/// One day of the forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub condition: Condition,
    pub precipitation_probability: u8,
    pub has_rain_or_snow: bool,
}

/// Canonical weather record: location, current conditions, and up to five
/// chronological forecast days (first day aligned with "today").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub location: Location,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_clear() {
        assert_eq!(Condition::from_code(0), Condition::Clear);
        assert_eq!(Condition::from_code(3), Condition::Clear);
    }

    #[test]
    fn code_fog() {
        assert_eq!(Condition::from_code(4), Condition::Fog);
        assert_eq!(Condition::from_code(49), Condition::Fog);
    }

    #[test]
    fn code_drizzle() {
        assert_eq!(Condition::from_code(50), Condition::Drizzle);
        assert_eq!(Condition::from_code(59), Condition::Drizzle);
    }

    #[test]
    fn code_rain() {
        assert_eq!(Condition::from_code(60), Condition::Rain);
        assert_eq!(Condition::from_code(69), Condition::Rain);
    }

    #[test]
    fn code_snow() {
        assert_eq!(Condition::from_code(70), Condition::Snow);
        assert_eq!(Condition::from_code(79), Condition::Snow);
    }

    #[test]
    fn code_thunderstorm() {
        assert_eq!(Condition::from_code(80), Condition::Thunderstorm);
        assert_eq!(Condition::from_code(99), Condition::Thunderstorm);
    }

    #[test]
    fn code_out_of_range_defaults_to_clear() {
        assert_eq!(Condition::from_code(100), Condition::Clear);
        assert_eq!(Condition::from_code(150), Condition::Clear);
        assert_eq!(Condition::from_code(-7), Condition::Clear);
    }

    #[test]
    fn precipitating_conditions() {
        assert!(Condition::Rain.is_precipitating());
        assert!(Condition::Snow.is_precipitating());
        assert!(Condition::Drizzle.is_precipitating());
        assert!(!Condition::Clear.is_precipitating());
        assert!(!Condition::Fog.is_precipitating());
        assert!(!Condition::Thunderstorm.is_precipitating());
    }
}
