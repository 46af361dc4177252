//! Outfit recommendation rule engine.
//!
//! Seven temperature bands partition [-50, 50) °C with half-open intervals,
//! each carrying a static base recommendation. A single condition-driven
//! override (first match wins) is then layered on top of a copy of the band
//! template. The engine is pure: no I/O, no shared mutable state.

use crate::model::Condition;
use serde::Serialize;

/// Opaque visual-reference token for a clothing item. Presentation maps
/// these to actual glyphs/images; the engine never interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingIcon {
    WinterHat,
    LightHat,
    HeavyCoat,
    LightJacket,
    TShirt,
    Pants,
    Shorts,
    WinterBoots,
    Sneakers,
    Sandals,
    Gloves,
    Sunglasses,
    Umbrella,
    Sunscreen,
    HotDrink,
    WaterBottle,
}

impl ClothingIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingIcon::WinterHat => "winter_hat",
            ClothingIcon::LightHat => "light_hat",
            ClothingIcon::HeavyCoat => "heavy_coat",
            ClothingIcon::LightJacket => "light_jacket",
            ClothingIcon::TShirt => "t_shirt",
            ClothingIcon::Pants => "pants",
            ClothingIcon::Shorts => "shorts",
            ClothingIcon::WinterBoots => "winter_boots",
            ClothingIcon::Sneakers => "sneakers",
            ClothingIcon::Sandals => "sandals",
            ClothingIcon::Gloves => "gloves",
            ClothingIcon::Sunglasses => "sunglasses",
            ClothingIcon::Umbrella => "umbrella",
            ClothingIcon::Sunscreen => "sunscreen",
            ClothingIcon::HotDrink => "hot_drink",
            ClothingIcon::WaterBottle => "water_bottle",
        }
    }
}

/// One recommended clothing item: an uppercase label plus its icon token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutfitSlot {
    pub icon: ClothingIcon,
    pub label: &'static str,
}

/// A six-slot outfit recommendation. An empty slot (`None`) means "nothing
/// recommended here"; presentation decides how (or whether) to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutfitRecommendation {
    pub head: Option<OutfitSlot>,
    pub upper: Option<OutfitSlot>,
    pub lower: Option<OutfitSlot>,
    pub foot: Option<OutfitSlot>,
    pub accessory: Option<OutfitSlot>,
    pub extra: Option<OutfitSlot>,
    /// Short imperative advice line.
    pub advice: &'static str,
    /// Longer explanatory sentence.
    pub description: &'static str,
}

const fn slot(icon: ClothingIcon, label: &'static str) -> Option<OutfitSlot> {
    Some(OutfitSlot { icon, label })
}

/// A temperature band `[low, high)` with its base recommendation.
struct Band {
    low: f64,
    high: f64,
    base: OutfitRecommendation,
}

/// Index of the mild band, also the fallback for out-of-range temperatures.
const MILD_BAND: usize = 3;

static BANDS: [Band; 7] = [
    // Very cold
    Band {
        low: -50.0,
        high: 0.0,
        base: OutfitRecommendation {
            head: slot(ClothingIcon::WinterHat, "WARM HAT"),
            upper: slot(ClothingIcon::HeavyCoat, "HEAVY COAT"),
            lower: slot(ClothingIcon::Pants, "THICK PANTS"),
            foot: slot(ClothingIcon::WinterBoots, "WINTER BOOTS"),
            accessory: slot(ClothingIcon::Gloves, "GLOVES/SCARF"),
            extra: slot(ClothingIcon::HotDrink, "HOT DRINK"),
            advice: "IT'S FREEZING OUTSIDE. BUNDLE UP HEAVILY.",
            description: "HEAVY WINTER CLOTHING IS REQUIRED FOR TODAY'S EXTREME COLD.",
        },
    },
    // Cold
    Band {
        low: 0.0,
        high: 10.0,
        base: OutfitRecommendation {
            head: slot(ClothingIcon::WinterHat, "BEANIE"),
            upper: slot(ClothingIcon::HeavyCoat, "WINTER JACKET"),
            lower: slot(ClothingIcon::Pants, "JEANS/PANTS"),
            foot: slot(ClothingIcon::WinterBoots, "BOOTS"),
            accessory: slot(ClothingIcon::Gloves, "SCARF"),
            extra: slot(ClothingIcon::Gloves, "GLOVES"),
            advice: "IT'S COLD OUTSIDE. DRESS WARMLY.",
            description: "A WARM LAYERED OUTFIT WILL KEEP YOU COMFORTABLE TODAY.",
        },
    },
    // Cool
    Band {
        low: 10.0,
        high: 15.0,
        base: OutfitRecommendation {
            head: slot(ClothingIcon::LightHat, "LIGHT HAT"),
            upper: slot(ClothingIcon::LightJacket, "LIGHT JACKET"),
            lower: slot(ClothingIcon::Pants, "PANTS"),
            foot: slot(ClothingIcon::Sneakers, "SNEAKERS"),
            accessory: slot(ClothingIcon::Gloves, "LIGHT SCARF"),
            extra: slot(ClothingIcon::Umbrella, "UMBRELLA"),
            advice: "IT'S COOL OUTSIDE. LIGHT LAYERS RECOMMENDED.",
            description: "LIGHT LAYERS WILL WORK WELL FOR TODAY'S COOLER TEMPERATURES.",
        },
    },
    // Mild
    Band {
        low: 15.0,
        high: 20.0,
        base: OutfitRecommendation {
            head: None,
            upper: slot(ClothingIcon::LightJacket, "LIGHT SWEATER"),
            lower: slot(ClothingIcon::Pants, "PANTS/JEANS"),
            foot: slot(ClothingIcon::Sneakers, "SNEAKERS"),
            accessory: None,
            extra: slot(ClothingIcon::Umbrella, "UMBRELLA"),
            advice: "IT'S MILD OUTSIDE. COMFORTABLE CLOTHING WORKS WELL.",
            description: "A COMFORTABLE OUTFIT WITH LIGHT LAYERS WOULD BE PERFECT TODAY.",
        },
    },
    // Warm
    Band {
        low: 20.0,
        high: 25.0,
        base: OutfitRecommendation {
            head: slot(ClothingIcon::LightHat, "CAP"),
            upper: slot(ClothingIcon::TShirt, "T-SHIRT"),
            lower: slot(ClothingIcon::Pants, "LIGHT PANTS"),
            foot: slot(ClothingIcon::Sneakers, "SNEAKERS"),
            accessory: slot(ClothingIcon::Sunglasses, "SUNGLASSES"),
            extra: slot(ClothingIcon::WaterBottle, "WATER"),
            advice: "IT'S WARM OUTSIDE. DRESS LIGHT.",
            description: "A LIGHT OUTFIT WOULD BE PERFECT FOR TODAY'S WEATHER.",
        },
    },
    // Hot
    Band {
        low: 25.0,
        high: 30.0,
        base: OutfitRecommendation {
            head: slot(ClothingIcon::LightHat, "SUN HAT"),
            upper: slot(ClothingIcon::TShirt, "T-SHIRT"),
            lower: slot(ClothingIcon::Shorts, "SHORTS"),
            foot: slot(ClothingIcon::Sandals, "SANDALS"),
            accessory: slot(ClothingIcon::Sunglasses, "SUNGLASSES"),
            extra: slot(ClothingIcon::Sunscreen, "SUNSCREEN"),
            advice: "IT'S HOT OUTSIDE. DRESS VERY LIGHT.",
            description: "LIGHTWEIGHT, BREATHABLE CLOTHING IS RECOMMENDED FOR TODAY'S HEAT.",
        },
    },
    // Very hot
    Band {
        low: 30.0,
        high: 50.0,
        base: OutfitRecommendation {
            head: slot(ClothingIcon::LightHat, "SUN HAT"),
            upper: slot(ClothingIcon::TShirt, "TANK TOP"),
            lower: slot(ClothingIcon::Shorts, "SHORTS"),
            foot: slot(ClothingIcon::Sandals, "SANDALS"),
            accessory: slot(ClothingIcon::Sunglasses, "SUNGLASSES"),
            extra: slot(ClothingIcon::Sunscreen, "SUNSCREEN"),
            advice: "IT'S EXTREMELY HOT. MINIMAL CLOTHING RECOMMENDED.",
            description: "WEAR AS LITTLE AS POSSIBLE AND STAY HYDRATED IN THIS EXTREME HEAT.",
        },
    },
];

/// Select the band template for a temperature. Temperatures outside
/// [-50, 50) fall back to the mild band instead of failing; any float is
/// a valid input.
fn band_for(temperature_c: f64) -> &'static OutfitRecommendation {
    BANDS
        .iter()
        .find(|band| temperature_c >= band.low && temperature_c < band.high)
        .map(|band| &band.base)
        .unwrap_or(&BANDS[MILD_BAND].base)
}

/// An override rule: a predicate over the inputs plus a transform applied
/// to a copy of the band template. Rules are evaluated in order and at
/// most one fires.
struct OverrideRule {
    applies: fn(Condition, bool, f64) -> bool,
    apply: fn(&mut OutfitRecommendation, f64),
}

// Ordering matters: the precipitation branch is checked before snow, fog,
// thunderstorm and clear-hot, so a reading that combines the precipitation
// flag with another condition resolves deterministically.
static OVERRIDES: [OverrideRule; 5] = [
    OverrideRule { applies: wet_applies, apply: apply_wet },
    OverrideRule { applies: snow_applies, apply: apply_snow },
    OverrideRule { applies: fog_applies, apply: apply_fog },
    OverrideRule { applies: thunderstorm_applies, apply: apply_thunderstorm },
    OverrideRule { applies: clear_hot_applies, apply: apply_clear_hot },
];

fn wet_applies(condition: Condition, has_precipitation: bool, _: f64) -> bool {
    matches!(condition, Condition::Rain | Condition::Drizzle) || has_precipitation
}

fn apply_wet(rec: &mut OutfitRecommendation, temperature_c: f64) {
    rec.extra = slot(ClothingIcon::Umbrella, "UMBRELLA");
    if temperature_c < 15.0 {
        rec.advice = "IT'S RAINY AND COLD. DRESS WARM & WATERPROOF.";
        rec.upper = slot(ClothingIcon::HeavyCoat, "WATERPROOF JACKET");
        rec.foot = slot(ClothingIcon::WinterBoots, "WATERPROOF BOOTS");
    } else {
        rec.advice = "IT'S RAINY. STAY DRY.";
        if temperature_c < 20.0 {
            rec.upper = slot(ClothingIcon::LightJacket, "LIGHT RAINCOAT");
        }
    }
}

fn snow_applies(condition: Condition, _: bool, _: f64) -> bool {
    condition == Condition::Snow
}

fn apply_snow(rec: &mut OutfitRecommendation, temperature_c: f64) {
    rec.extra = slot(ClothingIcon::HotDrink, "HOT DRINK");
    rec.advice = "IT'S SNOWING. KEEP WARM AND DRY.";
    rec.upper = slot(ClothingIcon::HeavyCoat, "SNOW-PROOF COAT");
    rec.foot = slot(ClothingIcon::WinterBoots, "SNOW BOOTS");
    rec.accessory = slot(ClothingIcon::Gloves, "GLOVES/SCARF");
    if temperature_c < 5.0 {
        rec.head = slot(ClothingIcon::WinterHat, "WARM HAT");
    }
}

fn fog_applies(condition: Condition, _: bool, _: f64) -> bool {
    condition == Condition::Fog
}

fn apply_fog(rec: &mut OutfitRecommendation, _: f64) {
    rec.advice = "IT'S FOGGY. WEAR VISIBLE COLORS.";
}

fn thunderstorm_applies(condition: Condition, _: bool, _: f64) -> bool {
    condition == Condition::Thunderstorm
}

fn apply_thunderstorm(rec: &mut OutfitRecommendation, _: f64) {
    rec.extra = slot(ClothingIcon::Umbrella, "STAY INDOORS");
    rec.advice = "THUNDERSTORM! AVOID GOING OUTSIDE IF POSSIBLE.";
    rec.upper = slot(ClothingIcon::HeavyCoat, "WATERPROOF JACKET");
}

fn clear_hot_applies(condition: Condition, _: bool, temperature_c: f64) -> bool {
    condition == Condition::Clear && temperature_c > 25.0
}

fn apply_clear_hot(rec: &mut OutfitRecommendation, _: f64) {
    rec.accessory = slot(ClothingIcon::Sunglasses, "SUNGLASSES");
    rec.extra = slot(ClothingIcon::Sunscreen, "SUNSCREEN");
    rec.advice = "IT'S SUNNY AND HOT. PROTECT FROM UV.";
}

/// Produce an outfit recommendation for the given current weather.
///
/// Pure and total: identical inputs always yield structurally identical
/// output, and every `f64` temperature is accepted (out-of-range values
/// select the mild band).
pub fn recommend(
    temperature_c: f64,
    condition: Condition,
    has_precipitation: bool,
) -> OutfitRecommendation {
    let mut outcome = *band_for(temperature_c);
    for rule in &OVERRIDES {
        if (rule.applies)(condition, has_precipitation, temperature_c) {
            (rule.apply)(&mut outcome, temperature_c);
            break;
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(slot: Option<OutfitSlot>) -> Option<&'static str> {
        slot.map(|s| s.label)
    }

    #[test]
    fn every_in_range_temperature_hits_exactly_one_band() {
        let mut t = -50.0;
        while t < 50.0 {
            let matching = BANDS
                .iter()
                .filter(|band| t >= band.low && t < band.high)
                .count();
            assert_eq!(matching, 1, "temperature {t} must match exactly one band");
            t += 0.5;
        }
    }

    #[test]
    fn clear_dry_returns_untouched_band_base() {
        for band in &BANDS {
            // Clear-hot override starts above 25, so probe below that.
            let probe = band.low.max(-50.0);
            if probe > 25.0 {
                continue;
            }
            let rec = recommend(probe, Condition::Clear, false);
            assert_eq!(rec, band.base);
        }
    }

    #[test]
    fn out_of_range_temperature_falls_back_to_mild_band() {
        let mild = &BANDS[MILD_BAND].base;
        assert_eq!(recommend(-80.0, Condition::Clear, false), *mild);
        assert_eq!(recommend(50.0, Condition::Clear, false), *mild);
        assert_eq!(recommend(120.0, Condition::Clear, false), *mild);
        assert_eq!(recommend(f64::NAN, Condition::Clear, false), *mild);
    }

    #[test]
    fn band_boundaries_are_half_open() {
        // 25.0 belongs to the hot band, not warm.
        assert_eq!(label(recommend(25.0, Condition::Clear, false).lower), Some("SHORTS"));
        assert_eq!(label(recommend(24.9, Condition::Clear, false).lower), Some("LIGHT PANTS"));
        // 0.0 belongs to cold, not very cold.
        assert_eq!(label(recommend(0.0, Condition::Clear, false).head), Some("BEANIE"));
        assert_eq!(label(recommend(-0.1, Condition::Clear, false).head), Some("WARM HAT"));
    }

    #[test]
    fn rain_condition_and_precipitation_flag_both_force_umbrella() {
        let by_condition = recommend(18.0, Condition::Rain, false);
        let by_flag = recommend(18.0, Condition::Clear, true);
        assert_eq!(label(by_condition.extra), Some("UMBRELLA"));
        assert_eq!(label(by_flag.extra), Some("UMBRELLA"));
        assert_eq!(by_condition, by_flag);
    }

    #[test]
    fn cold_rain_forces_waterproof_jacket_and_boots() {
        let rec = recommend(8.0, Condition::Rain, false);
        assert_eq!(label(rec.upper), Some("WATERPROOF JACKET"));
        assert_eq!(label(rec.foot), Some("WATERPROOF BOOTS"));
        assert_eq!(label(rec.extra), Some("UMBRELLA"));
        assert_eq!(rec.advice, "IT'S RAINY AND COLD. DRESS WARM & WATERPROOF.");
    }

    #[test]
    fn mild_rain_forces_light_raincoat_but_keeps_footwear() {
        let rec = recommend(18.0, Condition::Drizzle, false);
        assert_eq!(label(rec.upper), Some("LIGHT RAINCOAT"));
        // Footwear stays the mild band's sneakers.
        assert_eq!(label(rec.foot), Some("SNEAKERS"));
        assert_eq!(rec.advice, "IT'S RAINY. STAY DRY.");
    }

    #[test]
    fn warm_rain_changes_neither_upper_nor_footwear() {
        let rec = recommend(22.0, Condition::Rain, false);
        assert_eq!(label(rec.upper), Some("T-SHIRT"));
        assert_eq!(label(rec.foot), Some("SNEAKERS"));
        assert_eq!(label(rec.extra), Some("UMBRELLA"));
    }

    #[test]
    fn snow_below_five_adds_warm_hat() {
        let rec = recommend(-5.0, Condition::Snow, false);
        assert_eq!(label(rec.head), Some("WARM HAT"));
        assert_eq!(label(rec.upper), Some("SNOW-PROOF COAT"));
        assert_eq!(label(rec.foot), Some("SNOW BOOTS"));
        assert_eq!(label(rec.accessory), Some("GLOVES/SCARF"));
        assert_eq!(label(rec.extra), Some("HOT DRINK"));
    }

    #[test]
    fn snow_at_or_above_five_keeps_band_head() {
        let rec = recommend(8.0, Condition::Snow, false);
        // Cold band base head, untouched by the sub-override.
        assert_eq!(label(rec.head), Some("BEANIE"));
        assert_eq!(label(rec.upper), Some("SNOW-PROOF COAT"));
    }

    #[test]
    fn precipitation_flag_wins_over_snow_condition() {
        // Malformed-looking input: snow condition plus the independent
        // precipitation flag. The wet branch is checked first and wins.
        let rec = recommend(2.0, Condition::Snow, true);
        assert_eq!(label(rec.extra), Some("UMBRELLA"));
        assert_eq!(label(rec.upper), Some("WATERPROOF JACKET"));
        assert_ne!(rec.advice, "IT'S SNOWING. KEEP WARM AND DRY.");
    }

    #[test]
    fn fog_changes_advice_only() {
        let base = recommend(12.0, Condition::Clear, false);
        let foggy = recommend(12.0, Condition::Fog, false);
        assert_eq!(foggy.advice, "IT'S FOGGY. WEAR VISIBLE COLORS.");
        assert_eq!(foggy.head, base.head);
        assert_eq!(foggy.upper, base.upper);
        assert_eq!(foggy.lower, base.lower);
        assert_eq!(foggy.foot, base.foot);
        assert_eq!(foggy.accessory, base.accessory);
        assert_eq!(foggy.extra, base.extra);
        assert_eq!(foggy.description, base.description);
    }

    #[test]
    fn thunderstorm_forces_indoor_advice_and_waterproof_jacket() {
        let rec = recommend(17.0, Condition::Thunderstorm, false);
        assert_eq!(label(rec.extra), Some("STAY INDOORS"));
        assert_eq!(label(rec.upper), Some("WATERPROOF JACKET"));
        assert_eq!(rec.advice, "THUNDERSTORM! AVOID GOING OUTSIDE IF POSSIBLE.");
        // Unnamed slots keep the mild band values.
        assert_eq!(label(rec.lower), Some("PANTS/JEANS"));
        assert_eq!(label(rec.foot), Some("SNEAKERS"));
    }

    #[test]
    fn warm_clear_day_is_the_untouched_warm_band() {
        let rec = recommend(22.0, Condition::Clear, false);
        assert_eq!(label(rec.head), Some("CAP"));
        assert_eq!(label(rec.upper), Some("T-SHIRT"));
        assert_eq!(label(rec.lower), Some("LIGHT PANTS"));
        assert_eq!(label(rec.foot), Some("SNEAKERS"));
        assert_eq!(label(rec.accessory), Some("SUNGLASSES"));
        assert_eq!(label(rec.extra), Some("WATER"));
        assert_eq!(rec.advice, "IT'S WARM OUTSIDE. DRESS LIGHT.");
    }

    #[test]
    fn hot_clear_day_triggers_uv_override() {
        let rec = recommend(27.0, Condition::Clear, false);
        assert_eq!(label(rec.accessory), Some("SUNGLASSES"));
        assert_eq!(label(rec.extra), Some("SUNSCREEN"));
        // The override path executed: advice differs from the hot band base.
        assert_eq!(rec.advice, "IT'S SUNNY AND HOT. PROTECT FROM UV.");
        assert_ne!(rec.advice, BANDS[5].base.advice);
    }

    #[test]
    fn clear_at_25_does_not_trigger_uv_override() {
        let rec = recommend(25.0, Condition::Clear, false);
        assert_eq!(rec, BANDS[5].base);
    }

    #[test]
    fn mild_band_has_empty_head_and_accessory_slots() {
        let rec = recommend(17.0, Condition::Clear, false);
        assert_eq!(rec.head, None);
        assert_eq!(rec.accessory, None);
    }

    #[test]
    fn recommend_is_idempotent() {
        let cases = [
            (-12.0, Condition::Snow, false),
            (3.0, Condition::Rain, true),
            (17.0, Condition::Fog, false),
            (27.0, Condition::Clear, false),
            (33.0, Condition::Thunderstorm, false),
        ];
        for (t, condition, precip) in cases {
            assert_eq!(recommend(t, condition, precip), recommend(t, condition, precip));
        }
    }

    #[test]
    fn icon_tokens_are_stable() {
        assert_eq!(ClothingIcon::Umbrella.as_str(), "umbrella");
        assert_eq!(ClothingIcon::TShirt.as_str(), "t_shirt");
        assert_eq!(ClothingIcon::WinterBoots.as_str(), "winter_boots");
    }
}
