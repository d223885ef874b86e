//! Core library for the `wardrobe` CLI.
//!
//! This crate defines:
//! - Preferences handling (API key, last resolved city)
//! - Abstraction over the weather provider, with fixed fallback readings
//! - Shared domain models (weather readings, clothing items, quotes)
//! - The outfit, color and quote recommendation engines
//!
//! It is used by `wardrobe-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod provider;
pub mod recommend;

pub use config::{DEFAULT_CITY, Preferences};
pub use model::{ClothingItem, Condition, Quote, TimeOfDay, WeatherReading};
pub use provider::{
    ProviderError, ResolvedWeather, WeatherProvider, fetch_city_or_fallback,
    fetch_coords_or_fallback, openweather::OpenWeatherProvider,
};
pub use recommend::{
    ColorScheme, OutfitRecommendation, Style,
    alternatives::outfit_alternatives,
    colors::{ColorCombination, ColorRecommendations, PaletteColor, color_recommendations},
    quotes::random_quote,
    suggestion::{OutfitSuggestion, outfit_suggestion, outfit_suggestion_at},
};
