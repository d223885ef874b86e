use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use wardrobe_core::{
    OpenWeatherProvider, Preferences, TimeOfDay, color_recommendations, fetch_city_or_fallback,
    fetch_coords_or_fallback, outfit_alternatives, outfit_suggestion, random_quote,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wardrobe", version, about = "Weather-based outfit recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store your OpenWeather API key.
    Configure,

    /// Show weather and outfit recommendations for a location.
    Show {
        /// City name; defaults to the last remembered city.
        city: Option<String>,

        /// Latitude, paired with --lon (overrides the city).
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude, paired with --lat.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Override the time of day used for color picks
        /// (morning, afternoon or evening).
        #[arg(long)]
        time_of_day: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show {
                city,
                lat,
                lon,
                time_of_day,
            } => show(city, lat.zip(lon), time_of_day).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut prefs = Preferences::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        bail!("API key cannot be empty.");
    }

    prefs.api_key = Some(api_key.trim().to_string());
    prefs.save()?;

    println!("API key saved to {}", Preferences::file_path()?.display());
    Ok(())
}

async fn show(
    city: Option<String>,
    coords: Option<(f64, f64)>,
    time_of_day: Option<String>,
) -> anyhow::Result<()> {
    let mut prefs = Preferences::load()?;
    let provider = OpenWeatherProvider::new(prefs.api_key()?.to_string())?;

    let time_of_day = match time_of_day {
        Some(value) => TimeOfDay::try_from(value.as_str())?,
        None => TimeOfDay::now(),
    };

    let (resolved, searched_city) = if let Some((lat, lon)) = coords {
        (fetch_coords_or_fallback(&provider, lat, lon).await, None)
    } else {
        let city = match city {
            Some(name) => {
                let trimmed = name.trim().to_string();
                if trimmed.is_empty() {
                    bail!("City name is empty.");
                }
                trimmed
            }
            None => prefs.city_or_default().to_string(),
        };
        let resolved = fetch_city_or_fallback(&provider, &city).await;
        (resolved, Some(city))
    };

    if resolved.substituted {
        println!("Note: the weather service was unreachable; using sample weather data.\n");
    }

    // Remember the city so the next bare `wardrobe show` reuses it.
    if let Some(city) = searched_city {
        prefs.remember_city(&city);
        prefs.save()?;
    }

    let reading = &resolved.reading;
    println!("{}", render::reading(reading));

    let alts = outfit_alternatives(reading.temperature_c, &reading.condition);
    println!("{}", render::alternatives(&alts));

    let mut rng = rand::thread_rng();
    let colors = color_recommendations(
        reading.temperature_c,
        &reading.condition,
        time_of_day,
        &mut rng,
    );
    println!("{}", render::colors(&colors));

    let suggestion = outfit_suggestion(reading.temperature_c, &reading.condition);
    println!("{}", render::suggestion(&suggestion));

    let quote = random_quote(&reading.condition, &mut rng);
    println!("{}", render::quote(&quote));

    Ok(())
}
