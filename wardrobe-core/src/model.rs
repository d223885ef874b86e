use serde::{Deserialize, Serialize};

/// Categorical weather state as reported by the provider.
///
/// Unrecognized values are preserved as-is in `Other`, so downstream
/// substring checks ("rain", "snow") still see the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Other(String),
}

impl Condition {
    pub fn as_str(&self) -> &str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Drizzle => "Drizzle",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Snow => "Snow",
            Condition::Mist => "Mist",
            Condition::Fog => "Fog",
            Condition::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        match value {
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            "Rain" => Condition::Rain,
            "Drizzle" => Condition::Drizzle,
            "Thunderstorm" => Condition::Thunderstorm,
            "Snow" => Condition::Snow,
            "Mist" => Condition::Mist,
            "Fog" => Condition::Fog,
            other => Condition::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized current-weather reading, constructed once per fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub condition: Condition,
    pub description: String,
}

/// One piece of clothing (or accessory) with suggested substitutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Free-form category, e.g. "top", "outer", "footwear", "head".
    pub kind: String,
    pub name: String,
    pub description: String,
    pub alternatives: Vec<String>,
}

impl ClothingItem {
    pub fn new(kind: &str, name: &str, description: &str, alternatives: &[&str]) -> Self {
        Self {
            kind: kind.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            alternatives: alternatives.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Item without substitute suggestions (used by the plain suggestion engine).
    pub fn plain(kind: &str, name: &str, description: &str) -> Self {
        Self::new(kind, name, description, &[])
    }
}

/// A weather-themed quote, picked per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Coarse time-of-day buckets used by the color engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeOfDay::Morning
        } else if hour < 18 {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        }
    }

    pub fn now() -> Self {
        use chrono::Timelike;
        Self::from_hour(chrono::Local::now().hour())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TimeOfDay {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            _ => Err(anyhow::anyhow!(
                "Unknown time of day '{value}'. Expected morning, afternoon or evening."
            )),
        }
    }
}
