use anyhow::Context;
use clap::{Parser, Subcommand};
use wearcast_core::{Config, OpenMeteoProvider, WeatherRecord, fetch_weather};

use crate::{demo, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wearcast", version, about = "Weather and outfit recommendation CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set the default location and forecast length.
    Configure,

    /// Show current weather and the multi-day forecast.
    Show {
        /// Location name or "lat,lon" coordinates; defaults to the
        /// configured location.
        location: Option<String>,

        /// Render canned demonstration data instead of calling the provider.
        #[arg(long)]
        demo: bool,
    },

    /// Show the recommended outfit for the current weather.
    Outfit {
        /// Location name or "lat,lon" coordinates; defaults to the
        /// configured location.
        location: Option<String>,

        /// Render canned demonstration data instead of calling the provider.
        #[arg(long)]
        demo: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, demo } => {
                let record = load_record(location, demo).await?;
                println!("{}", render::weather_report(&record));
                Ok(())
            }
            Command::Outfit { location, demo } => {
                let record = load_record(location, demo).await?;
                println!("{}", render::outfit_report(&record));
                Ok(())
            }
        }
    }
}

/// Fetch the weather record for the given or configured location, or the
/// demo record when requested.
async fn load_record(location: Option<String>, demo: bool) -> anyhow::Result<WeatherRecord> {
    if demo {
        return Ok(demo::sample_record());
    }

    let config = Config::load()?;
    let query = match location {
        Some(location) => location,
        None => config.default_location()?.to_string(),
    };

    let provider = OpenMeteoProvider::from_config(&config);
    let record = fetch_weather(&provider, &query)
        .await
        .with_context(|| format!("Failed to look up weather for '{query}'"))?;

    Ok(record)
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let location = inquire::Text::new("Default location (name or lat,lon):")
        .with_help_message("Used when a command is run without a location argument")
        .prompt()?;

    let days = inquire::CustomType::<u8>::new("Forecast days (1-5):")
        .with_default(config.effective_forecast_days())
        .prompt()?;

    let location = location.trim();
    if location.is_empty() {
        anyhow::bail!("Default location cannot be empty.");
    }

    config.set_default_location(location.to_string());
    config.forecast_days = Some(days.clamp(1, 5));
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
