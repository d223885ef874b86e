//! Randomized color palette recommendations.
//!
//! Seven fixed pools feed temperature-banded sampling; condition and
//! time-of-day append further draws. Sampling is uniform without
//! replacement through the caller-supplied RNG, so production output is
//! intentionally non-reproducible while tests can seed exact draws.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::model::{Condition, TimeOfDay};

/// A named color with its hex value. Neutral colors pair with anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    pub hex: String,
    pub neutral: bool,
}

/// One suggested (top, bottom) pairing with a short blurb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCombination {
    pub top: PaletteColor,
    pub bottom: PaletteColor,
    pub description: String,
}

/// Color recommendation output: sampled top/bottom colors plus pairings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecommendations {
    pub tops: Vec<PaletteColor>,
    pub bottoms: Vec<PaletteColor>,
    pub combinations: Vec<ColorCombination>,
}

// Fixed pools, 8 colors each, organized by climate appropriateness.

static WARM: &[(&str, &str)] = &[
    ("Burgundy", "#800020"),
    ("Rust", "#B7410E"),
    ("Mustard", "#E1AD01"),
    ("Terracotta", "#C66B3D"),
    ("Olive", "#708238"),
    ("Camel", "#C19A6B"),
    ("Chocolate", "#7B3F00"),
    ("Cinnamon", "#D2691E"),
];

static COOL: &[(&str, &str)] = &[
    ("Navy", "#000080"),
    ("Teal", "#008080"),
    ("Forest Green", "#228B22"),
    ("Slate Blue", "#6A5ACD"),
    ("Plum", "#8E4585"),
    ("Emerald", "#046307"),
    ("Indigo", "#4B0082"),
    ("Cobalt", "#0047AB"),
];

static LIGHT: &[(&str, &str)] = &[
    ("Sky Blue", "#87CEEB"),
    ("Mint", "#98FB98"),
    ("Lavender", "#E6E6FA"),
    ("Peach", "#FFDAB9"),
    ("Light Yellow", "#FFFFE0"),
    ("Powder Blue", "#B0E0E6"),
    ("Pale Pink", "#FADADD"),
    ("Ivory", "#FFFFF0"),
];

static BRIGHT: &[(&str, &str)] = &[
    ("Coral", "#FF7F50"),
    ("Turquoise", "#40E0D0"),
    ("Hot Pink", "#FF69B4"),
    ("Lime Green", "#32CD32"),
    ("Bright Yellow", "#FFFF00"),
    ("Electric Blue", "#7DF9FF"),
    ("Magenta", "#FF00FF"),
    ("Tangerine", "#F28500"),
];

// Navy appears both here and in COOL; only this entry is neutral.
static NEUTRAL: &[(&str, &str)] = &[
    ("Black", "#000000"),
    ("White", "#FFFFFF"),
    ("Gray", "#808080"),
    ("Beige", "#F5F5DC"),
    ("Khaki", "#C3B091"),
    ("Charcoal", "#36454F"),
    ("Cream", "#FFFDD0"),
    ("Navy", "#000080"),
];

static MUTED: &[(&str, &str)] = &[
    ("Sage", "#BCB88A"),
    ("Mauve", "#E0B0FF"),
    ("Dusty Blue", "#8A9A9A"),
    ("Taupe", "#483C32"),
    ("Dusty Rose", "#DCAE96"),
    ("Slate Gray", "#708090"),
    ("Muted Teal", "#66CDAA"),
    ("Faded Denim", "#6F8FAF"),
];

static DARK: &[(&str, &str)] = &[
    ("Maroon", "#800000"),
    ("Deep Purple", "#301934"),
    ("Hunter Green", "#355E3B"),
    ("Midnight Blue", "#191970"),
    ("Espresso", "#3C2414"),
    ("Eggplant", "#614051"),
    ("Charcoal Gray", "#36454F"),
    ("Deep Teal", "#004D4D"),
];

fn pool(colors: &[(&str, &str)], neutral: bool) -> Vec<PaletteColor> {
    colors
        .iter()
        .map(|(name, hex)| PaletteColor {
            name: (*name).to_string(),
            hex: (*hex).to_string(),
            neutral,
        })
        .collect()
}

fn warm_pool() -> Vec<PaletteColor> {
    pool(WARM, false)
}
fn cool_pool() -> Vec<PaletteColor> {
    pool(COOL, false)
}
fn light_pool() -> Vec<PaletteColor> {
    pool(LIGHT, false)
}
fn bright_pool() -> Vec<PaletteColor> {
    pool(BRIGHT, false)
}
fn neutral_pool() -> Vec<PaletteColor> {
    pool(NEUTRAL, true)
}
fn muted_pool() -> Vec<PaletteColor> {
    pool(MUTED, false)
}
fn dark_pool() -> Vec<PaletteColor> {
    pool(DARK, false)
}

/// Uniform sample without replacement. Asking for more than is available
/// returns the whole (shuffled) pool.
fn sample<R: Rng>(mut colors: Vec<PaletteColor>, count: usize, rng: &mut R) -> Vec<PaletteColor> {
    colors.shuffle(rng);
    colors.truncate(count);
    colors
}

fn concat(pools: &[Vec<PaletteColor>]) -> Vec<PaletteColor> {
    pools.iter().flatten().cloned().collect()
}

/// Dedup by color name, first occurrence wins, order preserved.
fn dedup_by_name(colors: Vec<PaletteColor>) -> Vec<PaletteColor> {
    let mut seen = Vec::new();
    let mut result = Vec::new();
    for color in colors {
        if !seen.contains(&color.name) {
            seen.push(color.name.clone());
            result.push(color);
        }
    }
    result
}

fn combination_description(top: &PaletteColor, bottom: &PaletteColor) -> String {
    if top.neutral && !bottom.neutral {
        format!(
            "A {} top pairs well with {} bottoms for a balanced look.",
            top.name.to_lowercase(),
            bottom.name.to_lowercase()
        )
    } else if !top.neutral && bottom.neutral {
        format!(
            "The {} top creates a focal point against {} bottoms.",
            top.name.to_lowercase(),
            bottom.name.to_lowercase()
        )
    } else {
        format!(
            "{} and {} create a harmonious color combination.",
            top.name, bottom.name
        )
    }
}

/// Backfill each side with up to 2 neutrals not already present, then pair
/// index i of tops with index i+1 of bottoms (wrapping) for 4 pairs.
fn build_combinations<R: Rng>(
    tops: &[PaletteColor],
    bottoms: &[PaletteColor],
    rng: &mut R,
) -> Vec<ColorCombination> {
    let mut all_tops = tops.to_vec();
    let mut all_bottoms = bottoms.to_vec();

    let neutral_tops: Vec<PaletteColor> = neutral_pool()
        .into_iter()
        .filter(|color| !tops.iter().any(|top| top.name == color.name))
        .collect();
    let neutral_bottoms: Vec<PaletteColor> = neutral_pool()
        .into_iter()
        .filter(|color| !bottoms.iter().any(|bottom| bottom.name == color.name))
        .collect();

    all_tops.extend(sample(neutral_tops, 2, rng));
    all_bottoms.extend(sample(neutral_bottoms, 2, rng));

    (0..4)
        .map(|i| {
            let top = all_tops[i % all_tops.len()].clone();
            let bottom = all_bottoms[(i + 1) % all_bottoms.len()].clone();
            let description = combination_description(&top, &bottom);
            ColorCombination {
                top,
                bottom,
                description,
            }
        })
        .collect()
}

/// Color recommendations for the given temperature, condition and time of
/// day. Draws through `rng`; two calls with the same inputs may differ.
pub fn color_recommendations<R: Rng>(
    temperature_c: f64,
    condition: &Condition,
    time_of_day: TimeOfDay,
    rng: &mut R,
) -> ColorRecommendations {
    // Temperature picks the source pools for each side.
    let (mut tops, mut bottoms) = if temperature_c < 0.0 {
        (
            sample(concat(&[warm_pool(), dark_pool()]), 4, rng),
            sample(concat(&[neutral_pool(), dark_pool()]), 4, rng),
        )
    } else if temperature_c < 10.0 {
        (
            sample(concat(&[warm_pool(), cool_pool()]), 4, rng),
            sample(concat(&[neutral_pool(), dark_pool()]), 4, rng),
        )
    } else if temperature_c < 15.0 {
        (
            sample(concat(&[cool_pool(), muted_pool()]), 4, rng),
            sample(concat(&[neutral_pool(), cool_pool()]), 4, rng),
        )
    } else if temperature_c < 20.0 {
        (
            sample(concat(&[cool_pool(), muted_pool(), bright_pool()]), 4, rng),
            sample(concat(&[neutral_pool(), cool_pool()]), 4, rng),
        )
    } else if temperature_c < 25.0 {
        (
            sample(concat(&[light_pool(), bright_pool()]), 4, rng),
            sample(concat(&[neutral_pool(), light_pool()]), 4, rng),
        )
    } else if temperature_c < 30.0 {
        (
            sample(concat(&[light_pool(), bright_pool()]), 4, rng),
            sample(concat(&[light_pool(), neutral_pool()]), 4, rng),
        )
    } else {
        (
            sample(light_pool(), 4, rng),
            sample(concat(&[light_pool(), neutral_pool()]), 4, rng),
        )
    };

    match condition.as_str().to_lowercase().as_str() {
        "clear" => {
            tops.extend(sample(bright_pool(), 2, rng));
        }
        "clouds" => {
            tops.extend(sample(muted_pool(), 2, rng));
        }
        "rain" | "drizzle" | "snow" => {
            tops.extend(sample(cool_pool(), 2, rng));
            bottoms.extend(sample(dark_pool(), 2, rng));
        }
        "thunderstorm" => {
            tops.extend(sample(dark_pool(), 2, rng));
            bottoms.extend(sample(dark_pool(), 2, rng));
        }
        _ => {}
    }

    match time_of_day {
        TimeOfDay::Morning => tops.extend(sample(bright_pool(), 1, rng)),
        TimeOfDay::Evening => tops.extend(sample(dark_pool(), 1, rng)),
        TimeOfDay::Afternoon => {}
    }

    let mut tops = dedup_by_name(tops);
    let mut bottoms = dedup_by_name(bottoms);

    // Pairings are built from the full deduped lists, before truncation.
    let mut combinations = build_combinations(&tops, &bottoms, rng);
    combinations.truncate(4);

    tops.truncate(6);
    bottoms.truncate(6);

    ColorRecommendations {
        tops,
        bottoms,
        combinations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn names(pools: &[&[(&str, &str)]]) -> Vec<String> {
        pools
            .iter()
            .flat_map(|p| p.iter().map(|(name, _)| (*name).to_string()))
            .collect()
    }

    #[test]
    fn every_pool_has_eight_colors() {
        for p in [WARM, COOL, LIGHT, BRIGHT, NEUTRAL, MUTED, DARK] {
            assert_eq!(p.len(), 8);
        }
    }

    #[test]
    fn output_respects_size_limits() {
        let mut rng = rng();
        for temp in [-10.0, 5.0, 12.0, 17.0, 22.0, 27.0, 35.0] {
            let recs =
                color_recommendations(temp, &Condition::Rain, TimeOfDay::Evening, &mut rng);
            assert!(recs.tops.len() <= 6);
            assert!(recs.bottoms.len() <= 6);
            assert_eq!(recs.combinations.len(), 4);
        }
    }

    #[test]
    fn freezing_tops_come_from_warm_and_dark_pools() {
        let mut rng = rng();
        let recs =
            color_recommendations(-5.0, &Condition::Other("Haze".to_string()), TimeOfDay::Afternoon, &mut rng);
        let allowed = names(&[WARM, DARK]);
        assert_eq!(recs.tops.len(), 4);
        for top in &recs.tops {
            assert!(allowed.contains(&top.name), "unexpected top {}", top.name);
        }
    }

    #[test]
    fn very_hot_tops_are_light_only() {
        let mut rng = rng();
        let recs = color_recommendations(
            31.0,
            &Condition::Other("Haze".to_string()),
            TimeOfDay::Afternoon,
            &mut rng,
        );
        let allowed = names(&[LIGHT]);
        for top in &recs.tops {
            assert!(allowed.contains(&top.name));
        }
    }

    #[test]
    fn boundary_30_routes_to_light_only_tops() {
        let mut rng = rng();
        let recs = color_recommendations(
            30.0,
            &Condition::Other("Haze".to_string()),
            TimeOfDay::Afternoon,
            &mut rng,
        );
        let allowed = names(&[LIGHT]);
        for top in &recs.tops {
            assert!(allowed.contains(&top.name));
        }
    }

    #[test]
    fn condition_matching_is_lowercase_exact() {
        // "Rainy" is not "rain"; no cool/dark appends, so tops stay within
        // the warm band's light/bright union plus nothing else.
        let mut rng = rng();
        let recs = color_recommendations(
            22.0,
            &Condition::Other("Rainy".to_string()),
            TimeOfDay::Afternoon,
            &mut rng,
        );
        let allowed = names(&[LIGHT, BRIGHT]);
        for top in &recs.tops {
            assert!(allowed.contains(&top.name));
        }
    }

    #[test]
    fn no_duplicate_names_in_tops_or_bottoms() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let recs =
                color_recommendations(16.0, &Condition::Clear, TimeOfDay::Morning, &mut rng);
            for list in [&recs.tops, &recs.bottoms] {
                let mut seen = Vec::new();
                for color in list {
                    assert!(!seen.contains(&&color.name));
                    seen.push(&color.name);
                }
            }
        }
    }

    #[test]
    fn combination_descriptions_follow_neutrality_rules() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let recs =
                color_recommendations(8.0, &Condition::Snow, TimeOfDay::Evening, &mut rng);
            for combo in &recs.combinations {
                let expected = if combo.top.neutral && !combo.bottom.neutral {
                    format!(
                        "A {} top pairs well with {} bottoms for a balanced look.",
                        combo.top.name.to_lowercase(),
                        combo.bottom.name.to_lowercase()
                    )
                } else if !combo.top.neutral && combo.bottom.neutral {
                    format!(
                        "The {} top creates a focal point against {} bottoms.",
                        combo.top.name.to_lowercase(),
                        combo.bottom.name.to_lowercase()
                    )
                } else {
                    format!(
                        "{} and {} create a harmonious color combination.",
                        combo.top.name, combo.bottom.name
                    )
                };
                assert_eq!(combo.description, expected);
            }
        }
    }

    #[test]
    fn combination_members_come_from_source_or_neutral_backfill() {
        let mut rng = rng();
        let recs = color_recommendations(12.0, &Condition::Clouds, TimeOfDay::Afternoon, &mut rng);
        let neutral_names = names(&[NEUTRAL]);
        for combo in &recs.combinations {
            let top_known = recs.tops.iter().any(|c| c.name == combo.top.name)
                || neutral_names.contains(&combo.top.name);
            let bottom_known = recs.bottoms.iter().any(|c| c.name == combo.bottom.name)
                || neutral_names.contains(&combo.bottom.name);
            assert!(top_known);
            assert!(bottom_known);
        }
    }
}
