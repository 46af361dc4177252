//! Terminal rendering of weather records and outfit recommendations.
//!
//! Display policy lives here, not in the core: wind is rounded for
//! display, empty outfit slots are suppressed for compact output, and the
//! per-day outfit hints reuse the single core rule engine.

use wearcast_core::{OutfitRecommendation, WeatherRecord, recommend};

pub fn weather_report(record: &WeatherRecord) -> String {
    let location = &record.location;
    let current = &record.current;

    let mut lines = Vec::new();

    let place = if location.country.is_empty() {
        location.name.clone()
    } else {
        format!("{}, {}", location.name, location.country)
    };
    lines.push(format!(
        "{place} ({:.4}, {:.4})",
        location.latitude, location.longitude
    ));
    lines.push(format!("{} {}", current.date, current.time));
    lines.push(String::new());
    lines.push(format!(
        "{}  {:.1}°C (feels like {:.1}°C)",
        current.condition, current.temperature_c, current.feels_like_c
    ));
    lines.push(format!(
        "Humidity {}%  Wind {:.0} km/h  {}",
        current.humidity_pct,
        current.wind_speed_kmh.round(),
        match current.precipitation_mm {
            Some(mm) => format!("Precipitation {mm:.1} mm"),
            None => "Precipitation unknown".to_string(),
        }
    ));

    if !record.forecast.is_empty() {
        lines.push(String::new());
        lines.push("FORECAST".to_string());
        for day in &record.forecast {
            let hint = recommend(day.max_temp_c, day.condition, day.has_rain_or_snow);
            lines.push(format!(
                "{}  {:.0}-{:.0}°C  {}  {}%  [{}]",
                day.date,
                day.min_temp_c,
                day.max_temp_c,
                day.condition,
                day.precipitation_probability,
                slot_labels(&hint).join(", "),
            ));
        }
    }

    lines.join("\n")
}

pub fn outfit_report(record: &WeatherRecord) -> String {
    let current = &record.current;
    let rec = recommend(current.temperature_c, current.condition, current.has_rain_or_snow);

    let mut lines = Vec::new();
    lines.push("RECOMMENDED OUTFIT".to_string());
    lines.push(format!("OUTFIT FOR {:.0}°", current.temperature_c.round()));
    lines.push(rec.description.to_string());
    lines.push(String::new());

    for (name, slot) in [
        ("HEAD", rec.head),
        ("UPPER", rec.upper),
        ("LOWER", rec.lower),
        ("FOOT", rec.foot),
        ("ACCESSORY", rec.accessory),
        ("EXTRA", rec.extra),
    ] {
        if let Some(slot) = slot {
            lines.push(format!("  {name:<9}  {}", slot.label));
        }
    }

    lines.push(String::new());
    lines.push(rec.advice.to_string());

    lines.join("\n")
}

fn slot_labels(rec: &OutfitRecommendation) -> Vec<&'static str> {
    [rec.head, rec.upper, rec.lower, rec.foot, rec.accessory, rec.extra]
        .into_iter()
        .flatten()
        .map(|slot| slot.label)
        .collect()
}
