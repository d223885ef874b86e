//! Text rendering of weather readings and recommendations.

use wardrobe_core::{
    ColorRecommendations, OutfitRecommendation, OutfitSuggestion, Quote, WeatherReading,
};

pub fn reading(reading: &WeatherReading) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Weather in {}, {}: {}\n",
        reading.location_name, reading.country, reading.description
    ));
    out.push_str(&format!(
        "  Temperature: {:.1}°C (feels like {:.1}°C)\n",
        reading.temperature_c, reading.feels_like_c
    ));
    out.push_str(&format!(
        "  Humidity: {}%  Pressure: {} hPa  Wind: {:.1} m/s\n",
        reading.humidity_pct, reading.pressure_hpa, reading.wind_speed_mps
    ));

    out
}

pub fn alternatives(alternatives: &[OutfitRecommendation]) -> String {
    let mut out = String::from("Outfit ideas:\n");

    for alt in alternatives {
        out.push_str(&format!(
            "\n  {} [{}] - {}\n",
            alt.name,
            alt.style.as_str(),
            alt.description
        ));

        out.push_str("    Items:\n");
        for item in &alt.items {
            out.push_str(&format!("      - {} ({})", item.name, item.kind));
            if !item.alternatives.is_empty() {
                out.push_str(&format!(" | or: {}", item.alternatives.join(", ")));
            }
            out.push('\n');
        }

        if !alt.accessories.is_empty() {
            out.push_str("    Accessories:\n");
            for acc in &alt.accessories {
                out.push_str(&format!("      - {} ({})\n", acc.name, acc.kind));
            }
        }

        out.push_str(&format!(
            "    Colors: primary {} / secondary {} / accent {}\n",
            alt.colors.primary.join(", "),
            alt.colors.secondary.join(", "),
            alt.colors.accent.join(", ")
        ));
    }

    out
}

pub fn colors(recs: &ColorRecommendations) -> String {
    let mut out = String::from("Color palette:\n");

    let swatches = |list: &[wardrobe_core::PaletteColor]| {
        list.iter()
            .map(|c| format!("{} {}", c.name, c.hex))
            .collect::<Vec<_>>()
            .join(", ")
    };

    out.push_str(&format!("  Tops: {}\n", swatches(&recs.tops)));
    out.push_str(&format!("  Bottoms: {}\n", swatches(&recs.bottoms)));

    out.push_str("  Combinations:\n");
    for combo in &recs.combinations {
        out.push_str(&format!(
            "    {} + {}: {}\n",
            combo.top.name, combo.bottom.name, combo.description
        ));
    }

    out
}

pub fn suggestion(suggestion: &OutfitSuggestion) -> String {
    format!("Suggestion: {}\n", suggestion.as_text())
}

pub fn quote(quote: &Quote) -> String {
    format!("\"{}\" - {}\n", quote.text, quote.author)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_core::{Condition, outfit_alternatives, outfit_suggestion_at};

    fn sample_reading() -> WeatherReading {
        WeatherReading {
            location_name: "Bergen".to_string(),
            country: "NO".to_string(),
            temperature_c: 7.4,
            feels_like_c: 4.1,
            humidity_pct: 88,
            pressure_hpa: 1002,
            wind_speed_mps: 6.2,
            condition: Condition::Rain,
            description: "light rain".to_string(),
        }
    }

    #[test]
    fn reading_shows_all_measurements() {
        let text = reading(&sample_reading());
        assert!(text.contains("Weather in Bergen, NO: light rain"));
        assert!(text.contains("7.4°C"));
        assert!(text.contains("Humidity: 88%"));
        assert!(text.contains("1002 hPa"));
    }

    #[test]
    fn alternatives_render_names_and_styles() {
        let alts = outfit_alternatives(7.4, &Condition::Rain);
        let text = alternatives(&alts);
        assert!(text.contains("Cold Weather Casual [casual]"));
        assert!(text.contains("Cold Weather Athletic [sporty]"));
        assert!(text.contains("Rain Protection"));
    }

    #[test]
    fn suggestion_renders_as_single_line() {
        let s = outfit_suggestion_at(7.4, &Condition::Rain, 13);
        let text = suggestion(&s);
        assert!(text.starts_with("Suggestion: It's quite cold today."));
        assert!(text.contains("Umbrella"));
    }

    #[test]
    fn quote_renders_text_and_author() {
        let q = Quote {
            text: "When snow falls, nature listens.".to_string(),
            author: "Antoinette van Kleeff".to_string(),
        };
        assert_eq!(
            quote(&q),
            "\"When snow falls, nature listens.\" - Antoinette van Kleeff\n"
        );
    }
}
