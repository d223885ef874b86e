//! Outfit recommendation engines.
//!
//! Three independently evolved paths share this module:
//! - [`alternatives`] — curated outfit cards per temperature band (5 bands);
//! - [`colors`] — randomized color palette recommendations (7 bands);
//! - [`suggestion`] — free-text outfit suggestion (7 bands, deterministic).
//!
//! The band boundaries intentionally differ between paths; they grew apart
//! in the product and unifying them would change visible output.

use serde::{Deserialize, Serialize};

use crate::model::ClothingItem;

pub mod alternatives;
pub mod colors;
pub mod quotes;
pub mod suggestion;

/// Overall style of a curated outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Casual,
    Formal,
    Sporty,
    Trendy,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Casual => "casual",
            Style::Formal => "formal",
            Style::Sporty => "sporty",
            Style::Trendy => "trendy",
        }
    }
}

/// Named color groups attached to a curated outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub accent: Vec<String>,
}

impl ColorScheme {
    fn new(primary: &[&str], secondary: &[&str], accent: &[&str]) -> Self {
        let owned = |names: &[&str]| names.iter().map(|s| (*s).to_string()).collect();
        Self {
            primary: owned(primary),
            secondary: owned(secondary),
            accent: owned(accent),
        }
    }
}

/// One complete curated outfit: items, accessories, colors and a style tag.
/// Produced fresh per request, never cached or mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    /// Stable slug, e.g. "winter-casual".
    pub id: String,
    pub name: String,
    pub description: String,
    pub items: Vec<ClothingItem>,
    pub accessories: Vec<ClothingItem>,
    pub colors: ColorScheme,
    pub style: Style,
}
