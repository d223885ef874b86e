//! Weather-themed quotes, keyed by the exact condition name.
//!
//! Lookup is case-sensitive; anything outside the five populated keys
//! (including Drizzle, Mist, Fog) falls back to the default list.

use rand::Rng;

use crate::model::{Condition, Quote};

fn quote(text: &str, author: &str) -> Quote {
    Quote {
        text: text.to_string(),
        author: author.to_string(),
    }
}

fn quotes_for(condition: &Condition) -> Vec<Quote> {
    match condition.as_str() {
        "Clear" => vec![
            quote(
                "Wherever you go, no matter what the weather, always bring your own sunshine.",
                "Anthony J. D'Angelo",
            ),
            quote("A sunny day is a happy day.", "Anonymous"),
            quote(
                "Keep your face always toward the sunshine, and shadows will fall behind you.",
                "Walt Whitman",
            ),
        ],
        "Clouds" => vec![
            quote(
                "Clouds come floating into my life, no longer to carry rain or usher storm, but to add color to my sunset sky.",
                "Rabindranath Tagore",
            ),
            quote(
                "The sky and the clouds are always changing, so enjoy the view.",
                "Anonymous",
            ),
            quote(
                "Even when clouds grow thick, the sun still pours its light earthward.",
                "Mark Nepo",
            ),
        ],
        "Rain" => vec![
            quote("Some people feel the rain. Others just get wet.", "Bob Marley"),
            quote(
                "Let the rain kiss you. Let the rain beat upon your head with silver liquid drops.",
                "Langston Hughes",
            ),
            quote(
                "The best thing one can do when it's raining is to let it rain.",
                "Henry Wadsworth Longfellow",
            ),
        ],
        "Snow" => vec![
            quote(
                "Snowflakes are one of nature's most fragile things, but just look what they can do when they stick together.",
                "Vista M. Kelly",
            ),
            quote("When snow falls, nature listens.", "Antoinette van Kleeff"),
            quote(
                "To appreciate the beauty of a snowflake it is necessary to stand out in the cold.",
                "Aristotle",
            ),
        ],
        "Thunderstorm" => vec![
            quote(
                "The sound of thunder reminds us that we are not in control.",
                "Anonymous",
            ),
            quote(
                "Life isn't about waiting for the storm to pass, it's about learning to dance in the rain.",
                "Vivian Greene",
            ),
            quote(
                "Thunderstorms are as much our friends as the sunshine.",
                "Criss Jami",
            ),
        ],
        _ => vec![
            quote(
                "Wherever you go, no matter what the weather, always bring your own sunshine.",
                "Anthony J. D'Angelo",
            ),
            quote(
                "Weather is a great metaphor for life — sometimes it's good, sometimes it's bad, and there's nothing much you can do about it but carry an umbrella.",
                "Terri Guillemets",
            ),
            quote(
                "Climate is what we expect, weather is what we get.",
                "Mark Twain",
            ),
        ],
    }
}

/// Uniformly random quote for the condition.
pub fn random_quote<R: Rng>(condition: &Condition, rng: &mut R) -> Quote {
    let mut quotes = quotes_for(condition);
    let index = rng.gen_range(0..quotes.len());
    quotes.swap_remove(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rain_quotes_have_exactly_three_known_authors() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let quote = random_quote(&Condition::Rain, &mut rng);
            assert!(
                ["Bob Marley", "Langston Hughes", "Henry Wadsworth Longfellow"]
                    .contains(&quote.author.as_str())
            );
        }
    }

    #[test]
    fn unmapped_conditions_use_the_default_list() {
        let defaults = ["Anthony J. D'Angelo", "Terri Guillemets", "Mark Twain"];
        let mut rng = StdRng::seed_from_u64(7);
        for condition in [
            Condition::Drizzle,
            Condition::Mist,
            Condition::Fog,
            Condition::Other("Sandstorm".to_string()),
        ] {
            for _ in 0..10 {
                let quote = random_quote(&condition, &mut rng);
                assert!(defaults.contains(&quote.author.as_str()));
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let defaults = ["Anthony J. D'Angelo", "Terri Guillemets", "Mark Twain"];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let quote = random_quote(&Condition::Other("rain".to_string()), &mut rng);
            assert!(defaults.contains(&quote.author.as_str()));
        }
    }

    #[test]
    fn every_list_has_three_entries() {
        for condition in [
            Condition::Clear,
            Condition::Clouds,
            Condition::Rain,
            Condition::Snow,
            Condition::Thunderstorm,
            Condition::Other("anything".to_string()),
        ] {
            assert_eq!(quotes_for(&condition).len(), 3);
        }
    }
}
