//! Free-text outfit suggestion.
//!
//! Independent of the curated card engine, with its own finer temperature
//! bands (seven instead of five) and its own four-bucket day period. Fully
//! deterministic for a fixed (temperature, condition, hour).

use chrono::Timelike;

use crate::model::{ClothingItem, Condition};

/// Plain-text suggestion: a lead sentence plus item and accessory lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitSuggestion {
    pub description: String,
    pub items: Vec<ClothingItem>,
    pub accessories: Vec<ClothingItem>,
}

impl OutfitSuggestion {
    /// One-line rendering of the whole suggestion.
    pub fn as_text(&self) -> String {
        let items = self
            .items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let accessories = if self.accessories.is_empty() {
            String::new()
        } else {
            format!(
                " Accessories: {}.",
                self.accessories
                    .iter()
                    .map(|acc| acc.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        };

        format!("{} Wear: {}.{}", self.description, items, accessories)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

fn day_period(hour: u32) -> DayPeriod {
    if (5..12).contains(&hour) {
        DayPeriod::Morning
    } else if (12..17).contains(&hour) {
        DayPeriod::Afternoon
    } else if (17..21).contains(&hour) {
        DayPeriod::Evening
    } else {
        DayPeriod::Night
    }
}

/// Suggestion using the current local wall-clock hour.
pub fn outfit_suggestion(temperature_c: f64, condition: &Condition) -> OutfitSuggestion {
    outfit_suggestion_at(temperature_c, condition, chrono::Local::now().hour())
}

/// Suggestion for an explicit hour (0–23); the testable entry point.
pub fn outfit_suggestion_at(
    temperature_c: f64,
    condition: &Condition,
    hour: u32,
) -> OutfitSuggestion {
    let (description, base_items, base_accessories) = base_for_temperature(temperature_c);

    let (condition_description, condition_items, condition_accessories) =
        condition_modifiers(temperature_c, condition);

    let (time_description, time_items, time_accessories) =
        time_modifiers(temperature_c, day_period(hour));

    let description = format!("{description}{condition_description}{time_description}");

    let items = dedup(
        base_items
            .into_iter()
            .chain(condition_items)
            .chain(time_items)
            .collect(),
    );
    let accessories = dedup(
        base_accessories
            .into_iter()
            .chain(condition_accessories)
            .chain(time_accessories)
            .collect(),
    );

    OutfitSuggestion {
        description,
        items,
        accessories,
    }
}

/// Dedup by (kind, name), first occurrence wins.
fn dedup(items: Vec<ClothingItem>) -> Vec<ClothingItem> {
    let mut result: Vec<ClothingItem> = Vec::new();
    for item in items {
        if !result
            .iter()
            .any(|kept| kept.kind == item.kind && kept.name == item.name)
        {
            result.push(item);
        }
    }
    result
}

#[allow(clippy::type_complexity)]
fn base_for_temperature(
    temperature_c: f64,
) -> (&'static str, Vec<ClothingItem>, Vec<ClothingItem>) {
    if temperature_c < 0.0 {
        (
            "It's freezing outside! Bundle up with multiple warm layers.",
            vec![
                ClothingItem::plain("top", "Thermal Undershirt", "A moisture-wicking base layer"),
                ClothingItem::plain("mid", "Heavy Sweater", "Wool or fleece for maximum insulation"),
                ClothingItem::plain("outer", "Winter Parka", "A windproof, insulated coat"),
                ClothingItem::plain("bottom", "Thermal Leggings", "As a base layer for your legs"),
                ClothingItem::plain("bottom", "Insulated Pants", "Thick pants to keep your legs warm"),
                ClothingItem::plain("footwear", "Insulated Boots", "Waterproof with good traction"),
            ],
            vec![
                ClothingItem::plain("head", "Winter Hat", "Covers ears and retains heat"),
                ClothingItem::plain("hands", "Insulated Gloves", "Waterproof and warm"),
                ClothingItem::plain("neck", "Thick Scarf", "To protect your neck and face"),
            ],
        )
    } else if temperature_c < 10.0 {
        (
            "It's quite cold today. Layer up for warmth.",
            vec![
                ClothingItem::plain("top", "Long-Sleeve Shirt", "As a base layer"),
                ClothingItem::plain("mid", "Sweater", "For insulation"),
                ClothingItem::plain("outer", "Winter Coat", "For protection against the cold"),
                ClothingItem::plain("bottom", "Jeans or Warm Pants", "Denim or thicker material"),
                ClothingItem::plain("footwear", "Closed Boots", "To keep feet warm"),
            ],
            vec![
                ClothingItem::plain("head", "Beanie", "To keep your head warm"),
                ClothingItem::plain("hands", "Gloves", "To protect your hands"),
                ClothingItem::plain("neck", "Scarf", "For neck warmth"),
            ],
        )
    } else if temperature_c < 15.0 {
        (
            "It's cool but manageable. A light jacket should suffice.",
            vec![
                ClothingItem::plain("top", "Long-Sleeve Shirt", "As a comfortable base"),
                ClothingItem::plain("outer", "Light Jacket", "For wind protection"),
                ClothingItem::plain("bottom", "Jeans or Pants", "Regular weight"),
                ClothingItem::plain("footwear", "Sneakers or Loafers", "Comfortable closed shoes"),
            ],
            vec![ClothingItem::plain(
                "neck",
                "Light Scarf",
                "Optional for added warmth",
            )],
        )
    } else if temperature_c < 20.0 {
        (
            "The weather is mild today. Light layers are perfect.",
            vec![
                ClothingItem::plain(
                    "top",
                    "T-Shirt or Light Long-Sleeve",
                    "Depending on your preference",
                ),
                ClothingItem::plain("outer", "Light Sweater or Cardigan", "For cooler moments"),
                ClothingItem::plain("bottom", "Jeans or Casual Pants", "Regular weight"),
                ClothingItem::plain(
                    "footwear",
                    "Sneakers or Casual Shoes",
                    "Comfortable everyday shoes",
                ),
            ],
            vec![],
        )
    } else if temperature_c < 25.0 {
        (
            "It's pleasantly warm. Light, breathable clothing is ideal.",
            vec![
                ClothingItem::plain("top", "T-Shirt", "Light and breathable"),
                ClothingItem::plain("bottom", "Light Pants or Jeans", "Regular or lightweight"),
                ClothingItem::plain("footwear", "Sneakers or Loafers", "Comfortable shoes"),
            ],
            vec![],
        )
    } else if temperature_c < 30.0 {
        (
            "It's hot today. Wear light, loose-fitting clothes to stay cool.",
            vec![
                ClothingItem::plain("top", "Short-Sleeve Shirt", "Lightweight and breathable"),
                ClothingItem::plain("bottom", "Shorts or Light Pants", "To keep cool"),
                ClothingItem::plain("footwear", "Sandals or Light Shoes", "Breathable footwear"),
            ],
            vec![ClothingItem::plain("head", "Sun Hat", "For sun protection")],
        )
    } else {
        (
            "It's very hot! Wear minimal, light clothing and stay hydrated.",
            vec![
                ClothingItem::plain("top", "Light T-Shirt or Tank Top", "The lighter the better"),
                ClothingItem::plain("bottom", "Shorts", "Light and airy"),
                ClothingItem::plain("footwear", "Sandals", "To keep feet cool"),
            ],
            vec![
                ClothingItem::plain("head", "Sun Hat", "Essential for sun protection"),
                ClothingItem::plain("eyes", "Sunglasses", "To protect your eyes"),
            ],
        )
    }
}

#[allow(clippy::type_complexity)]
fn condition_modifiers(
    temperature_c: f64,
    condition: &Condition,
) -> (&'static str, Vec<ClothingItem>, Vec<ClothingItem>) {
    match condition.as_str().to_lowercase().as_str() {
        "rain" | "drizzle" | "thunderstorm" => (
            " Don't forget rain protection!",
            vec![
                ClothingItem::plain("outer", "Raincoat or Waterproof Jacket", "To stay dry"),
                ClothingItem::plain("footwear", "Waterproof Shoes", "To keep feet dry"),
            ],
            vec![ClothingItem::plain("hand", "Umbrella", "For rain protection")],
        ),
        "snow" => (
            " Be prepared for snow and slippery conditions.",
            vec![ClothingItem::plain(
                "footwear",
                "Waterproof Snow Boots",
                "With good traction",
            )],
            vec![ClothingItem::plain(
                "hands",
                "Waterproof Gloves",
                "To keep hands dry and warm",
            )],
        ),
        "clear" if temperature_c > 20.0 => (
            " It's sunny, so protect yourself from the sun.",
            vec![],
            vec![
                ClothingItem::plain("eyes", "Sunglasses", "UV protection"),
                ClothingItem::plain("skin", "Sunscreen", "SPF 30+ recommended"),
            ],
        ),
        "mist" | "fog" => (
            " Visibility might be low, wear visible colors.",
            vec![],
            vec![ClothingItem::plain(
                "visibility",
                "Bright or Reflective Items",
                "For better visibility",
            )],
        ),
        _ => ("", vec![], vec![]),
    }
}

#[allow(clippy::type_complexity)]
fn time_modifiers(
    temperature_c: f64,
    period: DayPeriod,
) -> (String, Vec<ClothingItem>, Vec<ClothingItem>) {
    match period {
        DayPeriod::Morning | DayPeriod::Evening if temperature_c < 20.0 => {
            let label = if period == DayPeriod::Morning {
                "Morning"
            } else {
                "Evening"
            };
            (
                format!(" {label} temperatures might be cooler."),
                vec![ClothingItem::plain(
                    "outer",
                    "Light Layer",
                    "For temperature changes",
                )],
                vec![],
            )
        }
        DayPeriod::Night => {
            let accessories = if temperature_c < 15.0 {
                vec![ClothingItem::plain(
                    "visibility",
                    "Reflective Item",
                    "For visibility in the dark",
                )]
            } else {
                vec![]
            };
            (
                " It's nighttime, so bring an extra layer for cooler temperatures.".to_string(),
                vec![ClothingItem::plain(
                    "outer",
                    "Extra Layer",
                    "For nighttime temperature drop",
                )],
                accessories,
            )
        }
        _ => (String::new(), vec![], vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOON: u32 = 13;

    #[test]
    fn freezing_snow_example() {
        let suggestion = outfit_suggestion_at(-5.0, &Condition::Snow, NOON);
        assert!(suggestion.description.starts_with("It's freezing outside!"));
        assert!(suggestion.description.ends_with("slippery conditions."));
        assert!(
            suggestion
                .items
                .iter()
                .any(|item| item.kind == "outer" && item.name == "Winter Parka")
        );
        assert!(
            suggestion
                .accessories
                .iter()
                .any(|acc| acc.kind == "hands" && acc.name == "Waterproof Gloves")
        );
    }

    #[test]
    fn idempotent_at_a_fixed_hour() {
        let a = outfit_suggestion_at(17.0, &Condition::Rain, 8);
        let b = outfit_suggestion_at(17.0, &Condition::Rain, 8);
        assert_eq!(a, b);
    }

    #[test]
    fn boundaries_route_to_the_upper_band() {
        let cases = [
            (0.0, "It's quite cold today."),
            (10.0, "It's cool but manageable."),
            (15.0, "The weather is mild today."),
            (20.0, "It's pleasantly warm."),
            (25.0, "It's hot today."),
            (30.0, "It's very hot!"),
        ];
        for (temp, prefix) in cases {
            let suggestion =
                outfit_suggestion_at(temp, &Condition::Other("Haze".to_string()), NOON);
            assert!(
                suggestion.description.starts_with(prefix),
                "temp {temp}: got {}",
                suggestion.description
            );
        }
    }

    #[test]
    fn clear_adds_sun_protection_only_above_20() {
        let cool = outfit_suggestion_at(18.0, &Condition::Clear, NOON);
        assert!(!cool.description.contains("sunny"));

        let warm = outfit_suggestion_at(24.0, &Condition::Clear, NOON);
        assert!(warm.description.contains("It's sunny"));
        assert!(
            warm.accessories
                .iter()
                .any(|acc| acc.kind == "skin" && acc.name == "Sunscreen")
        );
    }

    #[test]
    fn duplicate_sunglasses_collapse_in_very_hot_clear_weather() {
        // Base very-hot accessories already include (eyes, Sunglasses); the
        // clear-sky modifier adds the same pair and must be dropped.
        let suggestion = outfit_suggestion_at(32.0, &Condition::Clear, NOON);
        let count = suggestion
            .accessories
            .iter()
            .filter(|acc| acc.kind == "eyes" && acc.name == "Sunglasses")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn morning_chill_adds_a_light_layer_below_20() {
        let suggestion = outfit_suggestion_at(16.0, &Condition::Clouds, 7);
        assert!(suggestion.description.ends_with("Morning temperatures might be cooler."));
        assert!(
            suggestion
                .items
                .iter()
                .any(|item| item.kind == "outer" && item.name == "Light Layer")
        );

        let warm_morning = outfit_suggestion_at(23.0, &Condition::Clouds, 7);
        assert!(!warm_morning.description.contains("Morning temperatures"));
    }

    #[test]
    fn night_always_adds_an_extra_layer() {
        let suggestion = outfit_suggestion_at(28.0, &Condition::Clouds, 23);
        assert!(suggestion.description.contains("It's nighttime"));
        assert!(
            suggestion
                .items
                .iter()
                .any(|item| item.name == "Extra Layer")
        );
        // Warm night: no reflective accessory.
        assert!(!suggestion.accessories.iter().any(|acc| acc.kind == "visibility"));

        let cold_night = outfit_suggestion_at(10.0, &Condition::Clouds, 2);
        assert!(
            cold_night
                .accessories
                .iter()
                .any(|acc| acc.kind == "visibility" && acc.name == "Reflective Item")
        );
    }

    #[test]
    fn day_period_buckets() {
        assert_eq!(day_period(4), DayPeriod::Night);
        assert_eq!(day_period(5), DayPeriod::Morning);
        assert_eq!(day_period(11), DayPeriod::Morning);
        assert_eq!(day_period(12), DayPeriod::Afternoon);
        assert_eq!(day_period(16), DayPeriod::Afternoon);
        assert_eq!(day_period(17), DayPeriod::Evening);
        assert_eq!(day_period(20), DayPeriod::Evening);
        assert_eq!(day_period(21), DayPeriod::Night);
    }

    #[test]
    fn text_rendering_includes_items_and_accessories() {
        let suggestion = outfit_suggestion_at(12.0, &Condition::Clouds, NOON);
        let text = suggestion.as_text();
        assert!(text.starts_with("It's cool but manageable."));
        assert!(text.contains("Wear: Long-Sleeve Shirt"));
        assert!(text.contains("Accessories: Light Scarf."));
    }
}
