//! Core library for the `wearcast` CLI.
//!
//! This crate defines:
//! - Shared domain models (locations, conditions, weather records)
//! - The weather normalizer (geocoding resolution + record building)
//! - The outfit recommendation rule engine
//! - Abstraction over the geocoding/forecast backend (Open-Meteo)
//! - Configuration handling
//!
//! It is used by `wearcast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod outfit;
pub mod provider;

pub use config::Config;
pub use error::WeatherError;
pub use model::{Condition, CurrentConditions, ForecastDay, Location, WeatherRecord};
pub use normalizer::{build_weather_record, fetch_weather, resolve_location};
pub use outfit::{ClothingIcon, OutfitRecommendation, OutfitSlot, recommend};
pub use provider::{GeoMatch, RawCurrent, RawDaily, RawForecast, WeatherProvider};
pub use provider::open_meteo::OpenMeteoProvider;
