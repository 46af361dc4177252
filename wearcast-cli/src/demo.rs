//! Canned demonstration data, shown when the user opts out of live
//! provider calls with `--demo`.

use wearcast_core::{Condition, CurrentConditions, ForecastDay, Location, WeatherRecord};

pub fn sample_record() -> WeatherRecord {
    WeatherRecord {
        location: Location {
            name: "Milan".to_string(),
            country: "Italy".to_string(),
            latitude: 45.4642,
            longitude: 9.19,
        },
        current: CurrentConditions {
            temperature_c: 18.5,
            feels_like_c: 17.6,
            condition: Condition::Clear,
            condition_icon: "01d".to_string(),
            humidity_pct: 68,
            wind_speed_kmh: 7.0,
            precipitation_mm: Some(0.0),
            uv_index: 0.0,
            date: "SAT, 20 APR".to_string(),
            time: "12:34".to_string(),
            has_rain_or_snow: false,
        },
        forecast: vec![
            ForecastDay {
                date: "SAT, 20 APR".to_string(),
                max_temp_c: 20.2,
                min_temp_c: 12.4,
                condition: Condition::Clear,
                precipitation_probability: 0,
                has_rain_or_snow: false,
            },
            ForecastDay {
                date: "SUN, 21 APR".to_string(),
                max_temp_c: 21.5,
                min_temp_c: 13.1,
                condition: Condition::Clear,
                precipitation_probability: 0,
                has_rain_or_snow: false,
            },
            ForecastDay {
                date: "MON, 22 APR".to_string(),
                max_temp_c: 19.8,
                min_temp_c: 14.3,
                condition: Condition::Rain,
                precipitation_probability: 60,
                has_rain_or_snow: true,
            },
            ForecastDay {
                date: "TUE, 23 APR".to_string(),
                max_temp_c: 17.5,
                min_temp_c: 11.9,
                condition: Condition::Drizzle,
                precipitation_probability: 30,
                has_rain_or_snow: true,
            },
            ForecastDay {
                date: "WED, 24 APR".to_string(),
                max_temp_c: 18.7,
                min_temp_c: 12.5,
                condition: Condition::Clear,
                precipitation_probability: 0,
                has_rain_or_snow: false,
            },
        ],
    }
}
